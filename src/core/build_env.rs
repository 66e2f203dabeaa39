//! Build environment state
//!
//! Accumulates the compiler and linker settings a framework script appends
//! before compilation: defines, flags, include and library paths, the linker
//! script and the libraries to link. One value is built per invocation and
//! handed to the external build system; nothing here is global.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::defaults::BUILD_DIR;

/// Value of a preprocessor define
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DefineValue {
    Int(i64),
    Str(String),
}

impl fmt::Display for DefineValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Str(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for DefineValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for DefineValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for DefineValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// A preprocessor define, optionally with a value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Define {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<DefineValue>,
}

impl Define {
    /// `NAME=value`
    pub fn new(name: &str, value: impl Into<DefineValue>) -> Self {
        Self {
            name: name.to_string(),
            value: Some(value.into()),
        }
    }

    /// Compiler argument form
    pub fn to_arg(&self) -> String {
        match &self.value {
            Some(value) => format!("-D{}={value}", self.name),
            None => format!("-D{}", self.name),
        }
    }
}

/// A static library the build system compiles from a source tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryTarget {
    /// Library name
    pub name: String,
    /// Object output directory
    pub build_dir: PathBuf,
    /// Sources to compile
    pub source_dir: PathBuf,
}

/// An entry of the link set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LinkLibrary {
    /// A system or prebuilt library, linked by name
    Named(String),
    /// A library built as part of this build
    Built(LibraryTarget),
}

/// Compiler and linker settings for one build
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildEnvironment {
    /// Build output root
    pub build_dir: PathBuf,
    /// Preprocessor defines (CPPDEFINES)
    pub cppdefines: Vec<Define>,
    /// C and C++ compiler flags (CCFLAGS)
    pub ccflags: Vec<String>,
    /// Linker flags and extra linker inputs (LINKFLAGS)
    pub linkflags: Vec<String>,
    /// Include paths (CPPPATH)
    pub cpppath: Vec<PathBuf>,
    /// Library search paths (LIBPATH)
    pub libpath: Vec<PathBuf>,
    /// Directories holding framework libraries (LIBSOURCE_DIRS)
    pub libsource_dirs: Vec<PathBuf>,
    /// Linker script (LDSCRIPT_PATH)
    pub ldscript_path: Option<PathBuf>,
    /// Libraries to link (LIBS)
    pub libs: Vec<LinkLibrary>,
}

impl Default for BuildEnvironment {
    fn default() -> Self {
        Self::new(Path::new(BUILD_DIR))
    }
}

impl BuildEnvironment {
    /// Create an empty environment building into `build_dir`
    pub fn new(build_dir: &Path) -> Self {
        Self {
            build_dir: build_dir.to_path_buf(),
            cppdefines: Vec::new(),
            ccflags: Vec::new(),
            linkflags: Vec::new(),
            cpppath: Vec::new(),
            libpath: Vec::new(),
            libsource_dirs: Vec::new(),
            ldscript_path: None,
            libs: Vec::new(),
        }
    }

    pub fn append_defines(&mut self, defines: impl IntoIterator<Item = Define>) {
        self.cppdefines.extend(defines);
    }

    pub fn append_ccflags<S: Into<String>>(&mut self, flags: impl IntoIterator<Item = S>) {
        self.ccflags.extend(flags.into_iter().map(Into::into));
    }

    pub fn append_linkflags<S: Into<String>>(&mut self, flags: impl IntoIterator<Item = S>) {
        self.linkflags.extend(flags.into_iter().map(Into::into));
    }

    pub fn append_cpppath(&mut self, paths: impl IntoIterator<Item = PathBuf>) {
        self.cpppath.extend(paths);
    }

    pub fn append_libpath(&mut self, paths: impl IntoIterator<Item = PathBuf>) {
        self.libpath.extend(paths);
    }

    pub fn append_libsource_dirs(&mut self, paths: impl IntoIterator<Item = PathBuf>) {
        self.libsource_dirs.extend(paths);
    }

    pub fn append_libs(&mut self, libs: impl IntoIterator<Item = LinkLibrary>) {
        self.libs.extend(libs);
    }

    /// Replace the linker script
    pub fn replace_ldscript(&mut self, path: impl Into<PathBuf>) {
        self.ldscript_path = Some(path.into());
    }

    /// Register a static library compiled from `source_dir`.
    ///
    /// Objects go to `<build_dir>/<name>`. The caller decides whether to
    /// link it.
    pub fn build_library(&self, name: &str, source_dir: &Path) -> LibraryTarget {
        LibraryTarget {
            name: name.to_string(),
            build_dir: self.build_dir.join(name),
            source_dir: source_dir.to_path_buf(),
        }
    }

    /// Look up a define by name
    pub fn define(&self, name: &str) -> Option<&Define> {
        self.cppdefines.iter().find(|d| d.name == name)
    }

    /// Arguments for the compiler: defines, flags, include paths
    pub fn compile_args(&self) -> Vec<String> {
        let mut args: Vec<String> = self.cppdefines.iter().map(Define::to_arg).collect();
        args.extend(self.ccflags.iter().cloned());
        args.extend(self.cpppath.iter().map(|p| format!("-I{}", p.display())));
        args
    }

    /// Arguments for the linker: flags, script, search paths, libraries
    pub fn link_args(&self) -> Vec<String> {
        let mut args = self.linkflags.clone();
        if let Some(script) = self.ldscript_path.as_ref().filter(|p| !p.as_os_str().is_empty()) {
            args.push(format!("-T{}", script.display()));
        }
        args.extend(self.libpath.iter().map(|p| format!("-L{}", p.display())));
        for lib in &self.libs {
            match lib {
                LinkLibrary::Named(name) => args.push(format!("-l{name}")),
                LinkLibrary::Built(target) => {
                    args.push(target.build_dir.join(format!("lib{}.a", target.name)).display().to_string());
                }
            }
        }
        args
    }
}
