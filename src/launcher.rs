// std imports
use std::process::{Child, Command, Stdio};

// local imports
use crate::{
    apps::{AppDirectory, AppInfo},
    error::{Error, Result},
    xerr::Suggestions,
};

// ---

/// Starts the application registered under `name` in the background.
///
/// The lookup ignores case. Standard input, output and error of the started process
/// are discarded and the process is not waited for.
pub fn open(apps: &AppDirectory, name: &str) -> Result<Child> {
    let app = apps.get(name).ok_or_else(|| Error::AppNotFound {
        name: name.to_owned(),
        suggestions: Suggestions::new(&name.to_lowercase(), apps.names()),
    })?;

    launch(app)
}

/// Starts `app` as a detached background process.
pub fn launch(app: &AppInfo) -> Result<Child> {
    let executable = which::which(&app.executable).map_err(|err| {
        log::debug!("failed to resolve {:?}: {}", app.executable, err);
        Error::ExecutableNotFound {
            name: app.name.clone(),
            executable: app.executable.clone(),
        }
    })?;

    log::debug!("start {:?} using {} {:?}", app.name, executable.display(), app.args);

    let mut command = Command::new(&executable);
    command
        .args(&app.args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    // Keep the child out of our process group so that terminal signals do not reach it.
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        command.process_group(0);
    }

    let child = command.spawn().map_err(|source| Error::Launch {
        name: app.name.clone(),
        source,
    })?;

    log::debug!("started {:?} with pid {}", app.name, child.id());
    Ok(child)
}
