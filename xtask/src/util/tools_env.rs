use crate::context::Context;
use std::ffi::OsString;

/// Build root exported to every child.
pub const ROOT_VAR: &str = "SYSV_ROOT";

/// Kernel architecture exported to build-path children.
pub const ARCH_VAR: &str = "SYSRV_KERNEL_ARCH";

/// Variables a child process receives on top of the inherited environment.
///
/// Mirrors what the toolchain files expect to find: the build root always,
/// the architecture only when the invocation bound one.
pub fn child_env(ctx: &Context) -> Vec<(String, OsString)> {
    let mut vars = vec![(ROOT_VAR.to_string(), ctx.root().as_os_str().to_owned())];
    if let Some(arch) = ctx.arch() {
        vars.push((ARCH_VAR.to_string(), OsString::from(arch)));
    }
    vars
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_context_exports_root_and_arch() {
        let ctx = Context::new("/src/sysrv", Some("rv64".to_string()));
        let vars = child_env(&ctx);
        assert_eq!(
            vars,
            vec![
                (ROOT_VAR.to_string(), OsString::from("/src/sysrv")),
                (ARCH_VAR.to_string(), OsString::from("rv64")),
            ]
        );
    }

    #[test]
    fn test_run_context_exports_root_only() {
        let ctx = Context::new("/src/sysrv", None);
        let vars = child_env(&ctx);
        assert_eq!(vars.len(), 1);
        assert_eq!(vars[0].0, ROOT_VAR);
    }
}
