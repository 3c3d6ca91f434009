/// Answers whether a command name resolves to an executable on this host.
pub trait ExecutableLocator: Send + Sync {
    fn locate(&self, name: &str) -> bool;
}

/// Looks the name up on `PATH`, the same way the shell would.
pub struct PathLocator;

impl ExecutableLocator for PathLocator {
    fn locate(&self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        which::which(name).is_ok()
    }
}
