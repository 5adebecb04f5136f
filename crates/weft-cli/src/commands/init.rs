use crate::logger;
use crate::GlobalOpts;
use colored::*;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

const DEFAULT_FILENAME: &str = "weft.json";

const MANIFEST_TEMPLATE: &str = r#"{
  "target_dir": "my-app",
  "files": {
    "/home/project/package.json": {
      "content": "{\n  \"name\": \"my-app\",\n  \"version\": \"0.1.0\",\n  \"private\": true,\n  \"scripts\": {\n    \"start\": \"node index.js\"\n  }\n}\n",
      "isBinary": false,
      "type": "file"
    },
    "/home/project/index.js": {
      "content": "console.log('hello from my-app');\n",
      "isBinary": false,
      "type": "file"
    },
    "/home/project/src/greeting.js": {
      "content": "module.exports = () => 'hello';\n",
      "isBinary": false,
      "type": "file"
    },
    "/home/project/.gitignore": {
      "content": "node_modules/\n",
      "isBinary": false,
      "type": "file"
    }
  }
}
"#;

/// Initialize a sample manifest file
pub fn handle_init(filename: Option<String>, _opts: GlobalOpts) {
    logger::debug("Handling init command");

    let target_filename = filename.unwrap_or_else(|| DEFAULT_FILENAME.to_string());
    let target_path = Path::new(&target_filename);

    logger::debug(&format!("Target file: {}", target_filename));

    // Check if file exists
    if target_path.exists() {
        // Check for skip confirmation flag
        let should_skip = std::env::var("WEFT_INIT_YES").is_ok();

        if !should_skip {
            print!(
                "{} File '{}' already exists. Overwrite? {} ",
                "?".bold().cyan(),
                target_filename,
                "[y/n] ›".dimmed()
            );
            let _ = io::stdout().flush();

            let mut response = String::new();
            if io::stdin().read_line(&mut response).is_ok() {
                let response = response.trim().to_lowercase();
                if response != "y" && response != "yes" {
                    logger::info("Operation cancelled by user");
                    println!("Operation cancelled.");
                    return;
                }
            } else {
                logger::error("Failed to read input");
                return;
            }
        } else {
            logger::debug("Skipping confirmation (WEFT_INIT_YES set)");
        }
    }

    // Write the manifest template
    match fs::write(&target_filename, MANIFEST_TEMPLATE) {
        Ok(_) => {
            logger::success(&format!("Created manifest file: {}", target_filename));
            println!();
            println!("{}  Manifest file created successfully!", "✔".green());
            println!();
            println!("Next steps:");
            println!(
                "  1. Edit {} with your generated files",
                target_filename.bold()
            );
            println!(
                "  2. Materialize it: weft apply {} --target-dir my-app",
                target_filename
            );
            println!("  3. Validate the result: weft check my-app");
            println!(
                "  4. Install dependencies: weft install my-app (or apply --install)"
            );
        }
        Err(e) => {
            logger::error(&format!("Failed to create manifest file: {}", e));
        }
    }
}
