/// Generate errors_gen.go: one error value per entry plus a code lookup

use crate::codegen::utils::{go_line_comment, go_string_literal, GENERATED_HEADER};
use crate::entry::Entry;
use crate::error::Result;
use std::fmt::Write;

pub const ERRORS_GEN_GO: &str = "./errors_gen.go";

pub fn generate_errors_gen_go(
    package: &str,
    default_message: &str,
    entries: &[Entry],
) -> Result<String> {
    let mut output = String::new();

    writeln!(output, "{}", GENERATED_HEADER)?;
    writeln!(output)?;
    writeln!(output, "package {}\n", package)?;

    writeln!(output, "// DefaultMessage is what clients see for every internal error.")?;
    writeln!(output, "const DefaultMessage = {}\n", go_string_literal(default_message))?;

    if entries.is_empty() {
        writeln!(output, "var codes = map[int]*Error{{}}\n")?;
    } else {
        writeln!(output, "var (")?;
        for entry in entries {
            let ident = entry.generated_identifier();
            let note = go_line_comment(entry.description());
            if entry.is_internal() {
                if note.is_empty() {
                    writeln!(output, "\t// {} is internal.", ident)?;
                } else {
                    writeln!(output, "\t// {}: {} (internal)", ident, note)?;
                }
                writeln!(
                    output,
                    "\t{} = New({}, {}, 0)",
                    ident,
                    entry.code,
                    go_string_literal(default_message)
                )?;
            } else {
                writeln!(output, "\t// {}: {} (HTTP {})", ident, note, entry.http_status)?;
                writeln!(
                    output,
                    "\t{} = New({}, {}, {})",
                    ident,
                    entry.code,
                    go_string_literal(&entry.http_message),
                    entry.http_status
                )?;
            }
        }
        writeln!(output, ")\n")?;

        writeln!(output, "var codes = map[int]*Error{{")?;
        for entry in entries {
            writeln!(output, "\t{}: {},", entry.code, entry.generated_identifier())?;
        }
        writeln!(output, "}}\n")?;
    }

    writeln!(output, "// FromCode returns the error declared for code.")?;
    writeln!(output, "func FromCode(code int) (*Error, bool) {{")?;
    writeln!(output, "\te, ok := codes[code]")?;
    writeln!(output, "\treturn e, ok")?;
    writeln!(output, "}}")?;

    Ok(output)
}
