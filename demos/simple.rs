use class_model::generator::Generator;
use class_model::{analyze, generate_class};

fn main() {
    let model = match Generator::new().create_simple_structure("person", "Copyright (c) 2026.") {
        Ok(model) => model,
        Err(e) => {
            eprintln!("Failed to create the model: {e:?}");
            return;
        }
    };
    let source = class_model::format_model(&model);

    match analyze(&source, "person.model") {
        Ok(result) => {
            let json_output = result.to_json().unwrap();
            println!("Successfully validated the model:\n{json_output}");
            match generate_class(&result.normalized_model, "person") {
                Ok(class) => println!("Generated class:\n{class}"),
                Err(e) => eprintln!("Failed to generate the class: {e:?}"),
            }
        }
        Err(e) => {
            eprintln!("Failed to analyze the model: {e:?}");
        }
    }
}
