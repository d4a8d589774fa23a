//! Assembles, links, and runs generated programs with the host `gcc`.

#![cfg(all(target_arch = "x86_64", any(target_os = "linux", target_os = "macos")))]

use anyhow::{Context, Result};
use compiler_c_munch::compile;
use std::{env, fs, path::PathBuf};

fn gcc_available() -> bool {
    duct::cmd!("gcc", "--version")
        .stdout_null()
        .stderr_null()
        .run()
        .is_ok()
}

/// Removed on drop, whether or not the test got as far as running the program.
struct ScratchDir(PathBuf);
impl ScratchDir {
    fn create(test_name: &str) -> Result<Self> {
        let dir = env::temp_dir().join(format!(
            "compiler-c-munch-{}-{test_name}",
            std::process::id()
        ));
        fs::create_dir_all(&dir)?;
        Ok(Self(dir))
    }
}
impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

/// Returns the process exit code, i.e. the low byte of `main`'s return value.
fn run(test_name: &str, src: &str) -> Result<i32> {
    let asm_text = compile(src.as_bytes()).with_context(|| src.to_owned())?;

    let dir = ScratchDir::create(test_name)?;
    let asm_filepath = dir.0.join("prog.s");
    let prog_filepath = dir.0.join("prog");
    fs::write(&asm_filepath, asm_text)?;

    duct::cmd!("gcc", &asm_filepath, "-o", &prog_filepath)
        .run()
        .context("gcc")?;
    let output = duct::cmd!(&prog_filepath).unchecked().run()?;

    output.status.code().context("Terminated by a signal")
}

fn assert_returns(test_name: &str, cases: &[(&str, i32)]) -> Result<()> {
    if gcc_available() == false {
        eprintln!("Skipping {test_name}: gcc is not available.");
        return Ok(());
    }
    for (i, (exp, expected)) in cases.iter().enumerate() {
        let src = format!("int main() {{ return {exp}; }}");
        let actual = run(&format!("{test_name}-{i}"), &src)?;
        assert_eq!(actual, *expected, "{src}");
    }
    Ok(())
}

#[test]
fn constant() -> Result<()> {
    assert_returns("constant", &[("32", 32), ("0", 0), ("255", 255)])
}

#[test]
fn unary() -> Result<()> {
    assert_returns(
        "unary",
        &[
            ("-1", 255),
            ("~0", 255),
            ("-~4+1", 6),
            ("!0", 1),
            ("!5", 0),
            ("!!7", 1),
            ("-(-3)", 3),
        ],
    )
}

#[test]
fn binary() -> Result<()> {
    assert_returns(
        "binary",
        &[
            ("1+2*3", 7),
            ("(1+2)*3", 9),
            ("8-3-2", 3),
            ("20/3", 6),
            ("-7/2", 253),
            ("2*3+(~7-34)", 220),
            ("100/10/5", 2),
        ],
    )
}

#[test]
fn silent_wraparound() -> Result<()> {
    assert_returns(
        "silent_wraparound",
        &[
            ("2147483647+1", 0),
            ("2147483647*2", 254),
            ("0-2147483647-1", 0),
            ("(0-2147483647-1)/16777216", 128),
        ],
    )
}

#[test]
fn scratch_dir_removed_after_failed_gcc() -> Result<()> {
    if gcc_available() == false {
        return Ok(());
    }
    let path = {
        let dir = ScratchDir::create("failed_gcc")?;
        let asm_filepath = dir.0.join("prog.s");
        fs::write(&asm_filepath, "\tnot_an_instruction\n")?;
        let res = duct::cmd!("gcc", &asm_filepath, "-o", dir.0.join("prog"))
            .stderr_null()
            .run();
        assert!(res.is_err());
        dir.0.clone()
    };
    assert!(path.exists() == false);
    Ok(())
}
