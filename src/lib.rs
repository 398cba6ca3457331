//! # generrorx: error codes from one annotated enum
//!
//! Declare error codes once, in the `ErrorCode` enum of a `.proto` schema,
//! and generate Go error values plus web-framework glue from it.
//!
//! ```text
//! enum ErrorCode {
//!     USER_NOT_FOUND    = 10001;  // 用户不存在 @http=404
//!     DB_CONNECT_FAILED = 20001;  // 数据库连接失败
//! }
//! ```
//!
//! Entries annotated with `@http=STATUS` are *public*: clients receive that
//! status and the comment text. All others are *internal*: clients receive a
//! 500 and a configurable default message.
//!
//! ## Layout
//!
//! - [`entry`]: the entry model and identifier derivation
//! - [`parser`]: schema and compiled-binding entry sources
//! - [`codegen`]: the generator contract, registry and Go targets
//! - [`compiler`]: optional protoc invocation

pub mod entry;
pub mod error;
pub mod parser;
pub mod codegen;
pub mod compiler;

// Re-export key types
pub use entry::Entry;
pub use error::{Error, Result};
pub use parser::{parse_legacy_binding, parse_schema};
pub use codegen::{generate, GenerationConfig, Generator, GeneratorRegistry, OutputFile};
