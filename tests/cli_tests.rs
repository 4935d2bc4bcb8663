//! Integration tests for the stencil command line

mod common;
use common::TestEnvironment;

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_cli_help_command() {
    let env = TestEnvironment::new();
    let output = env.stencil(&["--help"]);

    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains("render"));
    assert!(stdout.contains("placeholders"));
}

#[test]
fn test_render_inline_to_stdout() {
    let env = TestEnvironment::new();
    let output = env.stencil(&[
        "-q",
        "render",
        "-i",
        "FROM %%BASE_IMAGE%%\nRUN echo %%MSG%%",
        "-V",
        "BASE_IMAGE=alpine:3.18",
        "-V",
        "MSG=hi",
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "FROM alpine:3.18\nRUN echo hi");
}

#[test]
fn test_render_template_file_to_output() {
    let env = TestEnvironment::new();
    env.write("Dockerfile.tpl", "FROM %%BASE%%\nEXPOSE %%PORT%%\n");
    env.write("vars.toml", "BASE = \"debian:12\"\nPORT = 8080\n");

    let output = env.stencil(&[
        "render",
        "-t",
        "Dockerfile.tpl",
        "--vars",
        "vars.toml",
        "-o",
        "build/Dockerfile",
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "");
    assert_eq!(env.read("build/Dockerfile"), "FROM debian:12\nEXPOSE 8080\n");
}

#[test]
fn test_var_overrides_vars_file() {
    let env = TestEnvironment::new();
    env.write("vars.toml", "BASE = \"debian\"\n");

    let output = env.stencil(&[
        "-q",
        "render",
        "-i",
        "%%BASE%%",
        "--vars",
        "vars.toml",
        "-V",
        "BASE=alpine",
    ]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "alpine");
}

#[test]
fn test_render_job_file() {
    let env = TestEnvironment::new();
    env.write("jobs/Dockerfile.tpl", "FROM %%BASE%%");
    env.write(
        "jobs/stencil.toml",
        "template_file = \"Dockerfile.tpl\"\noutput_file = \"Dockerfile\"\n\
         [variables]\nBASE = \"alpine\"\n",
    );

    let output = env.stencil(&["-q", "render", "--job", "jobs"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(env.read("jobs/Dockerfile"), "FROM alpine");
}

#[test]
fn test_single_pass_flag() {
    let env = TestEnvironment::new();
    let args = ["-q", "render", "-i", "%%a%%", "-V", "a=%%b%%", "-V", "b=B"];

    let sequential = env.stencil(&args);
    assert_eq!(stdout(&sequential), "B");

    let mut single = args.to_vec();
    single.push("--single-pass");
    let single = env.stencil(&single);
    assert_eq!(stdout(&single), "%%b%%");
}

#[test]
fn test_strict_fails_on_unbound_placeholders() {
    let env = TestEnvironment::new();

    let output = env.stencil(&["render", "-i", "%%a%% %%b%%", "-V", "a=1", "--strict"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("b"));

    let output = env.stencil(&["-q", "render", "-i", "%%a%% %%b%%", "-V", "a=1"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1 %%b%%");
}

#[test]
fn test_missing_template_file_fails() {
    let env = TestEnvironment::new();
    let output = env.stencil(&["render", "-t", "nope.tpl"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("does not exist"));
}

#[test]
fn test_no_template_fails() {
    let env = TestEnvironment::new();
    let output = env.stencil(&["render", "-V", "a=1"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Either a template or a template file must be set"));
}

#[test]
fn test_invalid_var_fails() {
    let env = TestEnvironment::new();

    let output = env.stencil(&["render", "-i", "x", "-V", "bad key=1"]);
    assert!(!output.status.success());

    let output = env.stencil(&["render", "-i", "x", "-V", "NOEQUALS"]);
    assert!(!output.status.success());
}

#[test]
fn test_structured_vars_file_fails() {
    let env = TestEnvironment::new();
    env.write("vars.toml", "LIST = [1, 2]\n");

    let output = env.stencil(&["render", "-i", "%%LIST%%", "--vars", "vars.toml"]);
    assert!(!output.status.success());
}

#[test]
fn test_placeholders_command() {
    let env = TestEnvironment::new();
    env.write("app.tpl", "%%HOST%%:%%PORT%% %%HOST%%");

    let output = env.stencil(&[
        "-q",
        "placeholders",
        "app.tpl",
        "-V",
        "HOST=localhost",
        "-V",
        "EXTRA=1",
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let stdout = stdout(&output);
    assert!(stdout.contains("HOST = localhost"));
    assert!(stdout.contains("PORT"));
    assert_eq!(stdout.matches("HOST").count(), 1);
}

#[test]
fn test_placeholders_reports_overlapping_tokens() {
    let env = TestEnvironment::new();
    env.write("ab.tpl", "%%A%%B%%");

    let output = env.stencil(&["placeholders", "ab.tpl", "-V", "B=2"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("B = 2"));
    assert!(!stderr(&output).contains("Variáveis não usadas"));
}

#[test]
fn test_job_variables_merge_with_cli_and_strict_output() {
    let env = TestEnvironment::new();
    env.write("app.tpl", "%%HOST%%:%%PORT%%");
    env.write(
        "stencil.toml",
        "template_file = \"app.tpl\"\noutput_file = \"out/app.conf\"\n\
         [variables]\nHOST = \"db\"\nPORT = 5432\n",
    );

    let output = env.stencil(&["-q", "render", "--job", ".", "-V", "HOST=cache", "--strict"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(env.read("out/app.conf"), "cache:5432");
}
