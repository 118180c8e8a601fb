//! The `explain` command: print the documentation page of an error code.

use dolly_diagnostic::{ErrorCode, ErrorDocs};

/// Print the page for `code_str`, or list the known codes when it is not one.
pub fn explain_error(code_str: &str) -> bool {
    match ErrorCode::parse(code_str) {
        Some(code) => {
            println!("{}", ErrorDocs::get(code));
            true
        }
        None => {
            eprintln!("Unknown error code: {code_str}");
            eprintln!();
            eprintln!("Known codes:");
            for &code in ErrorCode::ALL {
                eprintln!("  {code}  {}", ErrorDocs::title(code));
            }
            false
        }
    }
}
