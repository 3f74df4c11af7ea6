use std::{
    env,
    path::{Path, PathBuf},
};

// A TempCwd temporarily changes the current working directory for the
// host process. The previous directory is restored when it is dropped.
//
// Only tests use this, so it panics instead of returning Result.
// Any test that uses it should be marked #[serial].
pub(crate) struct TempCwd {
    old_path: PathBuf,
}

impl TempCwd {
    pub(crate) fn new<P: AsRef<Path>>(path: P) -> TempCwd {
        let old_path = env::current_dir().unwrap();
        env::set_current_dir(path).unwrap();

        TempCwd { old_path }
    }
}

impl Drop for TempCwd {
    fn drop(&mut self) {
        env::set_current_dir(&self.old_path).unwrap();
    }
}
