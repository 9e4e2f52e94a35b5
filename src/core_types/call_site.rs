//! Call-site metadata captured at the point of a logging call.

use serde::Serialize;
use std::fmt;

/// Source location of a logging call.
///
/// Built by [`call_site!`](crate::call_site) from compiler-provided
/// built-ins, so capturing one costs nothing at runtime. The raw values are
/// kept as-is; the accessors derive the short forms forwarded to outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CallSite {
    file: &'static str,
    module: &'static str,
    function: &'static str,
    line: u32,
    column: u32,
}

impl CallSite {
    /// Create a call site from raw parts.
    ///
    /// `function` may be a full path (`my_crate::net::connect`) or a bare
    /// name; [`function`](Self::function) always yields the bare name.
    pub const fn new(
        file: &'static str,
        module: &'static str,
        function: &'static str,
        line: u32,
        column: u32,
    ) -> Self {
        Self {
            file,
            module,
            function,
            line,
            column,
        }
    }

    /// The path as given by `file!()`.
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// Last component of the source path, e.g. `"conn.rs"`.
    pub fn file_name(&self) -> &'static str {
        file_name(self.file)
    }

    /// Stable identifier of the source file relative to its crate.
    pub fn file_id(&self) -> String {
        file_id(self.bundle(), self.file)
    }

    /// Module path of the call, as given by `module_path!()`.
    pub fn module(&self) -> &'static str {
        self.module
    }

    /// Name of the crate the call was compiled in.
    pub fn bundle(&self) -> &'static str {
        self.module.split("::").next().unwrap_or(self.module)
    }

    /// Bare name of the enclosing function.
    pub fn function(&self) -> &'static str {
        function_name(self.function)
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {}", self.file_name(), self.line, self.function())
    }
}

/// Last component of a source path. Both `/` and `\` count as separators.
pub fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Map a source path to an identifier that does not depend on where the
/// crate was checked out.
///
/// The identifier is the bundle name followed by the path below the last
/// `src` directory. Paths without a `src` directory keep only the file name.
///
/// ```rust
/// use sitelog::file_id;
///
/// assert_eq!(file_id("app", "/home/ci/app/src/net/conn.rs"), "app/net/conn.rs");
/// assert_eq!(file_id("app", "build/generated.rs"), "app/generated.rs");
/// ```
pub fn file_id(bundle: &str, file_path: &str) -> String {
    let normalized = file_path.replace('\\', "/");
    let relative = normalized
        .rsplit_once("/src/")
        .map(|(_, rest)| rest)
        .or_else(|| normalized.strip_prefix("src/"))
        .unwrap_or_else(|| file_name(&normalized));
    format!("{bundle}/{relative}")
}

/// Reduce a `type_name` style path to the bare function name.
///
/// Trailing closure segments are folded into the enclosing function, so a
/// call inside `fn bar() { move || ... }` still reports `bar`.
pub fn function_name(path: &'static str) -> &'static str {
    let mut path = path;
    while let Some(stripped) = path.strip_suffix("::{{closure}}") {
        path = stripped;
    }
    path.rsplit("::").next().unwrap_or(path)
}

#[doc(hidden)]
pub fn __enclosing_path<T>(_: T) -> &'static str {
    let name = std::any::type_name::<T>();
    name.strip_suffix("::__here").unwrap_or(name)
}
