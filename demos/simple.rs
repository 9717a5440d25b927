use vouch_core::{array_of, check_json, is_number, is_string, object_of, optional};

fn main() {
    let user = object_of! {
        "name" => is_string,
        "email" => optional(is_string),
        "scores" => array_of(is_number),
    };

    let body = r#"
        {
            "name": "John Doe",
            "email": "john.doe@example.com",
            "scores": [9.5, "7"]
        }
    "#;

    match check_json(&user, body, "request.json") {
        Ok(record) => {
            println!("Accepted: {record:?}");
        }
        Err(e) => {
            eprintln!("Rejected: {:?}", miette::Report::new(e));
        }
    }
}
