use std::{io, path::PathBuf};

use thiserror::Error;

use super::ShaderStage;

/// Which kind of named shader input a lookup was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationKind {
    Attribute,
    Uniform,
}

impl std::fmt::Display for LocationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Attribute => write!(f, "attribute"),
            Self::Uniform => write!(f, "uniform"),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
//                                     Errors arising while setting up the GPU                                       //
///////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Every one of these is fatal for setup. Nothing is retried.
#[derive(Debug, Error)]
pub enum GfxError {
    #[error("could not load shader source {}: {source}", .path.display())]
    ResourceLoad {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to compile {stage} shader: {log}")]
    ShaderCompile { stage: ShaderStage, log: String },

    #[error("failed to link program: {log}")]
    Link { log: String },

    #[error("{kind} `{name}` not found in program")]
    MissingLocation { kind: LocationKind, name: String },

    #[error("driver refused to create {what}: {reason}")]
    Allocation { what: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_diagnostic() {
        let err = GfxError::ShaderCompile {
            stage: ShaderStage::Fragment,
            log: "0:3: syntax error".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to compile fragment shader: 0:3: syntax error"
        );

        let err = GfxError::MissingLocation {
            kind: LocationKind::Uniform,
            name: "mvpMatrix".into(),
        };
        assert_eq!(err.to_string(), "uniform `mvpMatrix` not found in program");
    }

    #[test]
    fn resource_load_keeps_io_source() {
        use std::error::Error as _;

        let err = GfxError::ResourceLoad {
            path: PathBuf::from("shader/main.vert"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("shader/main.vert"));
        assert!(err.source().is_some());
    }
}
