/// Generate types.go: the Error value type and its helpers

use crate::codegen::utils::GENERATED_HEADER;
use crate::error::Result;
use std::fmt::Write;

pub const TYPES_GO: &str = "./types.go";

/// Framework extras rendered into types.go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypesFlavor {
    Plain,
    /// Adds `ToGError()` converting to a GoFrame coded error
    GoFrame,
}

pub fn generate_types_go(package: &str, flavor: TypesFlavor) -> Result<String> {
    let mut output = String::new();

    writeln!(output, "{}", GENERATED_HEADER)?;
    writeln!(output)?;
    writeln!(output, "package {}\n", package)?;

    writeln!(output, "import (")?;
    writeln!(output, "\t\"errors\"")?;
    writeln!(output, "\t\"fmt\"")?;
    writeln!(output, "\t\"net/http\"")?;
    if flavor == TypesFlavor::GoFrame {
        writeln!(output)?;
        writeln!(output, "\t\"github.com/gogf/gf/v2/errors/gcode\"")?;
        writeln!(output, "\t\"github.com/gogf/gf/v2/errors/gerror\"")?;
    }
    writeln!(output, ")\n")?;

    writeln!(output, "// Error is a classified error code. HttpCode 0 marks an internal error,")?;
    writeln!(output, "// which clients only ever see with the default message.")?;
    writeln!(output, "type Error struct {{")?;
    writeln!(output, "\tCode     int    `json:\"code\"`")?;
    writeln!(output, "\tMsg      string `json:\"msg\"`")?;
    writeln!(output, "\tHttpCode int    `json:\"-\"`")?;
    writeln!(output, "\tcause    error")?;
    writeln!(output, "}}\n")?;

    writeln!(output, "// Body is the JSON payload written to clients.")?;
    writeln!(output, "type Body struct {{")?;
    writeln!(output, "\tCode int    `json:\"code\"`")?;
    writeln!(output, "\tMsg  string `json:\"msg\"`")?;
    writeln!(output, "}}\n")?;

    // per-entry New(...) calls are emitted into errors_gen.go
    writeln!(output, "// New returns an error value for code.")?;
    writeln!(output, "func New(code int, msg string, httpCode int) *Error {{")?;
    writeln!(output, "\treturn &Error{{Code: code, Msg: msg, HttpCode: httpCode}}")?;
    writeln!(output, "}}\n")?;

    writeln!(output, "func (e *Error) Error() string {{")?;
    writeln!(output, "\tif e.cause != nil {{")?;
    writeln!(output, "\t\treturn fmt.Sprintf(\"code=%d msg=%s cause=%v\", e.Code, e.Msg, e.cause)")?;
    writeln!(output, "\t}}")?;
    writeln!(output, "\treturn fmt.Sprintf(\"code=%d msg=%s\", e.Code, e.Msg)")?;
    writeln!(output, "}}\n")?;

    writeln!(output, "// IsInternal reports whether the error is hidden behind the default message.")?;
    writeln!(output, "func (e *Error) IsInternal() bool {{")?;
    writeln!(output, "\treturn e.HttpCode == 0")?;
    writeln!(output, "}}\n")?;

    writeln!(output, "// Status is the HTTP status to respond with. Internal errors map to 500.")?;
    writeln!(output, "func (e *Error) Status() int {{")?;
    writeln!(output, "\tif e.IsInternal() {{")?;
    writeln!(output, "\t\treturn http.StatusInternalServerError")?;
    writeln!(output, "\t}}")?;
    writeln!(output, "\treturn e.HttpCode")?;
    writeln!(output, "}}\n")?;

    writeln!(output, "// Body returns the client payload for e.")?;
    writeln!(output, "func (e *Error) Body() Body {{")?;
    writeln!(output, "\treturn Body{{Code: e.Code, Msg: e.Msg}}")?;
    writeln!(output, "}}\n")?;

    writeln!(output, "// Wrap returns a copy of e carrying cause.")?;
    writeln!(output, "func (e *Error) Wrap(cause error) *Error {{")?;
    writeln!(output, "\tc := *e")?;
    writeln!(output, "\tc.cause = cause")?;
    writeln!(output, "\treturn &c")?;
    writeln!(output, "}}\n")?;

    writeln!(output, "func (e *Error) Unwrap() error {{")?;
    writeln!(output, "\treturn e.cause")?;
    writeln!(output, "}}\n")?;

    writeln!(output, "// Is matches any *Error with the same code, so wrapped copies compare equal.")?;
    writeln!(output, "func (e *Error) Is(target error) bool {{")?;
    writeln!(output, "\tt, ok := target.(*Error)")?;
    writeln!(output, "\treturn ok && t.Code == e.Code")?;
    writeln!(output, "}}\n")?;

    if flavor == TypesFlavor::GoFrame {
        writeln!(output, "// ToGError converts e into a GoFrame error carrying the same code.")?;
        writeln!(output, "func (e *Error) ToGError() error {{")?;
        writeln!(output, "\tcode := gcode.New(e.Code, e.Msg, nil)")?;
        writeln!(output, "\tif e.cause != nil {{")?;
        writeln!(output, "\t\treturn gerror.WrapCode(code, e.cause, e.Msg)")?;
        writeln!(output, "\t}}")?;
        writeln!(output, "\treturn gerror.NewCode(code, e.Msg)")?;
        writeln!(output, "}}\n")?;
    }

    writeln!(output, "// FromError finds an *Error in err's chain.")?;
    writeln!(output, "func FromError(err error) (*Error, bool) {{")?;
    writeln!(output, "\tvar e *Error")?;
    writeln!(output, "\tif errors.As(err, &e) {{")?;
    writeln!(output, "\t\treturn e, true")?;
    writeln!(output, "\t}}")?;
    writeln!(output, "\treturn nil, false")?;
    writeln!(output, "}}")?;

    Ok(output)
}
