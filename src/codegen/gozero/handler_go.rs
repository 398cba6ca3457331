/// Generate handler.go for go-zero's httpx error handler hook

use crate::codegen::utils::{go_string_literal, GENERATED_HEADER};
use crate::error::Result;
use std::fmt::Write;

pub const HANDLER_GO: &str = "./handler.go";

pub fn generate_handler_go(package: &str, import_path: &str) -> Result<String> {
    let mut output = String::new();

    writeln!(output, "{}", GENERATED_HEADER)?;
    writeln!(output)?;
    writeln!(output, "package {}\n", package)?;

    writeln!(output, "import (")?;
    writeln!(output, "\t\"context\"")?;
    writeln!(output, "\t\"net/http\"")?;
    writeln!(output)?;
    writeln!(output, "\t\"github.com/zeromicro/go-zero/core/logx\"")?;
    writeln!(output, ")\n")?;

    writeln!(output, "// ErrorHandler maps err onto a status code and JSON body. Register it once")?;
    writeln!(output, "// at startup:")?;
    writeln!(output, "//")?;
    if !import_path.is_empty() {
        writeln!(output, "//\timport {} {}", package, go_string_literal(import_path))?;
        writeln!(output, "//")?;
    }
    writeln!(output, "//\thttpx.SetErrorHandlerCtx({}.ErrorHandler)", package)?;
    writeln!(output, "//")?;
    writeln!(output, "// Internal errors are logged with their cause and answered with DefaultMessage.")?;
    writeln!(output, "func ErrorHandler(ctx context.Context, err error) (int, any) {{")?;
    writeln!(output, "\te, ok := FromError(err)")?;
    writeln!(output, "\tif !ok {{")?;
    writeln!(output, "\t\tlogx.WithContext(ctx).Errorf(\"unclassified error: %v\", err)")?;
    writeln!(output, "\t\treturn http.StatusInternalServerError, Body{{Code: http.StatusInternalServerError, Msg: DefaultMessage}}")?;
    writeln!(output, "\t}}")?;
    writeln!(output)?;
    writeln!(output, "\tif e.IsInternal() {{")?;
    writeln!(output, "\t\tlogx.WithContext(ctx).Errorf(\"internal error: %v\", e)")?;
    writeln!(output, "\t}}")?;
    writeln!(output, "\treturn e.Status(), e.Body()")?;
    writeln!(output, "}}")?;

    Ok(output)
}
