/// Generate middleware.go for GoFrame's ghttp middleware chain

use crate::codegen::utils::{go_string_literal, GENERATED_HEADER};
use crate::error::Result;
use std::fmt::Write;

pub const MIDDLEWARE_GO: &str = "./middleware.go";

pub fn generate_middleware_go(package: &str, import_path: &str) -> Result<String> {
    let mut output = String::new();

    writeln!(output, "{}", GENERATED_HEADER)?;
    writeln!(output)?;
    writeln!(output, "package {}\n", package)?;

    writeln!(output, "import (")?;
    writeln!(output, "\t\"net/http\"")?;
    writeln!(output)?;
    writeln!(output, "\t\"github.com/gogf/gf/v2/errors/gerror\"")?;
    writeln!(output, "\t\"github.com/gogf/gf/v2/net/ghttp\"")?;
    writeln!(output, ")\n")?;

    writeln!(output, "// ErrorMiddleware converts any handler error into the JSON body of its")?;
    writeln!(output, "// error code. Register it on the server or a route group:")?;
    writeln!(output, "//")?;
    if !import_path.is_empty() {
        writeln!(output, "//\timport {} {}", package, go_string_literal(import_path))?;
        writeln!(output, "//")?;
    }
    writeln!(output, "//\ts.Use({}.ErrorMiddleware)", package)?;
    writeln!(output, "//")?;
    writeln!(output, "// Errors raised with ToGError are mapped back through their gcode.")?;
    writeln!(output, "func ErrorMiddleware(r *ghttp.Request) {{")?;
    writeln!(output, "\tr.Middleware.Next()")?;
    writeln!(output)?;
    writeln!(output, "\terr := r.GetError()")?;
    writeln!(output, "\tif err == nil {{")?;
    writeln!(output, "\t\treturn")?;
    writeln!(output, "\t}}")?;
    writeln!(output)?;
    writeln!(output, "\te, ok := FromError(err)")?;
    writeln!(output, "\tif !ok {{")?;
    writeln!(output, "\t\te, ok = FromCode(gerror.Code(err).Code())")?;
    writeln!(output, "\t}}")?;
    writeln!(output, "\tif !ok {{")?;
    writeln!(output, "\t\te = New(http.StatusInternalServerError, DefaultMessage, 0)")?;
    writeln!(output, "\t}}")?;
    writeln!(output, "\tif e.IsInternal() {{")?;
    writeln!(output, "\t\tr.Server.Logger().Errorf(r.Context(), \"internal error: %+v\", err)")?;
    writeln!(output, "\t}}")?;
    writeln!(output)?;
    writeln!(output, "\tr.Response.ClearBuffer()")?;
    writeln!(output, "\tr.Response.WriteHeader(e.Status())")?;
    writeln!(output, "\tr.Response.WriteJson(e.Body())")?;
    writeln!(output, "}}")?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_middleware_go() {
        let code = generate_middleware_go("errorx", "myapp/errorx").unwrap();
        assert!(code.contains("func ErrorMiddleware(r *ghttp.Request) {"));
        assert!(code.contains("r.Middleware.Next()"));
        assert!(code.contains("FromCode(gerror.Code(err).Code())"));
        assert!(code.contains("//\ts.Use(errorx.ErrorMiddleware)"));
        assert!(code.contains("//\timport errorx \"myapp/errorx\""));
    }

    #[test]
    fn test_middleware_go_without_import_path() {
        let code = generate_middleware_go("errorx", "").unwrap();
        assert!(!code.contains("//\timport "));
        assert!(code.contains("//\ts.Use(errorx.ErrorMiddleware)"));
    }
}
