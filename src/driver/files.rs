use anyhow::{Result, anyhow};
use derive_more::{Deref, Display};
use std::{ffi::OsStr, path::PathBuf};

/// `foo.c`
#[derive(Deref, Display, Debug)]
#[display("{}", _0.display())]
pub struct SrcFilepath(PathBuf);
impl TryFrom<PathBuf> for SrcFilepath {
    type Error = anyhow::Error;
    fn try_from(p: PathBuf) -> Result<Self> {
        match p.extension() {
            Some(ext) if ext == OsStr::new("c") => Ok(Self(p)),
            _ => Err(anyhow!("Source file {p:?} must have extension `.c`.")),
        }
    }
}
impl SrcFilepath {
    /// `foo.s`, next to the source.
    pub fn asm_filepath(&self) -> AsmFilepath {
        AsmFilepath(self.with_extension("s"))
    }
}

#[derive(Deref, Display, Debug)]
#[display("{}", _0.display())]
pub struct AsmFilepath(PathBuf);
impl AsmFilepath {
    /// `foo`, the linked executable.
    pub fn program_filepath(&self) -> ProgramFilepath {
        ProgramFilepath(self.with_extension(""))
    }
}

#[derive(Deref, Display, Debug)]
#[display("{}", _0.display())]
pub struct ProgramFilepath(PathBuf);
