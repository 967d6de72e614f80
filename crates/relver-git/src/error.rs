use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("failed to run 'git {command}'")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'git {command}' failed: {stderr}")]
    Command { command: String, stderr: String },
}
