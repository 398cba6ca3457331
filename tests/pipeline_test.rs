//! End-to-end tests: schema on disk → generated Go files on disk

use generrorx::codegen::project_config::{ProjectConfig, PROJECT_FILE};
use generrorx::codegen::{run_generate, InputSource};
use std::fs;

const SCHEMA: &str = "\
enum ErrorCode {
    UNKNOWN           = 0;      // 未知错误
    USER_NOT_FOUND    = 10001;  // 用户不存在 @http=404
    DB_CONNECT_FAILED = 20001;  // 数据库连接失败
}
";

#[test]
fn test_project_file_drives_generation() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("error.proto"), SCHEMA).unwrap();
    fs::write(
        dir.path().join(PROJECT_FILE),
        "package: github.com/acme/shop\ntarget: gozero\noutput: errorx\n",
    )
    .unwrap();

    let opts = ProjectConfig::discover(dir.path())
        .unwrap()
        .unwrap()
        .into_gen_options(dir.path())
        .unwrap();
    assert_eq!(opts.input, InputSource::Schema(dir.path().join("error.proto")));
    assert_eq!(opts.import_path, "github.com/acme/shop/errorcode");

    let report = run_generate(&opts).unwrap().unwrap();
    assert_eq!(report.entries, 3);
    assert_eq!(report.public_entries, 1);

    let out = dir.path().join("errorx");
    let types = fs::read_to_string(out.join("types.go")).unwrap();
    let errors = fs::read_to_string(out.join("errors_gen.go")).unwrap();
    let handler = fs::read_to_string(out.join("handler.go")).unwrap();

    assert!(types.contains("package shop\n"));
    assert!(errors.contains("ErrUserNotFound = New(10001, \"用户不存在\", 404)"));
    assert!(errors.contains("ErrDbConnectFailed = New(20001, \"服务繁忙\", 0)"));
    assert!(handler.contains("import shop \"github.com/acme/shop/errorcode\""));
}

#[test]
fn test_legacy_binding_fallback() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("errorcode")).unwrap();
    fs::write(
        dir.path().join("errorcode/error.pb.go"),
        "\t\t0: \"UNKNOWN\",\n\t\t10001: \"USER_NOT_FOUND\",\n",
    )
    .unwrap();

    let opts = ProjectConfig {
        package: Some("myapp".to_string()),
        default_message: Some("service busy".to_string()),
        ..Default::default()
    }
    .into_gen_options(dir.path())
    .unwrap();

    let report = run_generate(&opts).unwrap().unwrap();
    assert_eq!(report.entries, 2);
    assert_eq!(report.public_entries, 0);

    let errors = fs::read_to_string(dir.path().join("errors_gen.go")).unwrap();
    assert!(errors.contains("ErrUserNotFound = New(10001, \"service busy\", 0)"));
}
