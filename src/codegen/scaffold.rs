//! Starter schema written by `generrorx create`.

use crate::codegen::fs_utils::write_file;
use crate::error::Result;
use std::path::Path;

pub const TEMPLATE_SCHEMA: &str = r#"syntax = "proto3";
package errorcode;
option go_package = "./errorcode";

// ErrorCode lists every error the service can return.
//
//   NAME = CODE;  // message @http=STATUS   public: clients get STATUS and message
//   NAME = CODE;  // description            internal: clients get 500 and the default message
//
// Example:
//   USER_NOT_FOUND = 10001;  // 用户不存在 @http=404
//   DB_TIMEOUT     = 20001;  // 数据库超时
enum ErrorCode {
    UNKNOWN         = 0;      // 未知错误

    // business errors (10000-19999)
    // USER_NOT_FOUND  = 10001;  // 用户不存在 @http=404
    // INVALID_PARAM   = 10002;  // 参数错误 @http=400
    // UNAUTHORIZED    = 10003;  // 未授权 @http=401
    // FORBIDDEN       = 10004;  // 禁止访问 @http=403

    // internal errors (20000-29999)
    // DB_CONNECT_FAILED  = 20001;  // 数据库连接失败
    // REDIS_TIMEOUT      = 20002;  // Redis超时
    // RPC_CALL_FAILED    = 20003;  // RPC调用失败
}
"#;

/// Write the starter schema to `path`.
///
/// Returns `false` without touching anything when `path` already exists.
pub fn create_template<P: AsRef<Path>>(path: P) -> Result<bool> {
    let path = path.as_ref();
    if path.exists() {
        tracing::warn!(path = %path.display(), "schema already exists, skipping");
        return Ok(false);
    }

    write_file(path, TEMPLATE_SCHEMA)?;
    tracing::info!(path = %path.display(), "created schema template");
    Ok(true)
}
