use miette::{Diagnostic, SourceSpan};
use std::{
    error::Error,
    fmt::{Display, Formatter, Result},
};

#[derive(Debug, Diagnostic)]
pub enum ColorError {
    #[diagnostic(code(tincture::parse), url(docsrs))]
    Parse {
        #[source_code]
        src: String,
        #[label("not a recognized color")]
        err_span: SourceSpan,
        msg: String,
    },

    #[diagnostic(code(tincture::scale), url(docsrs))]
    Scale {
        #[source_code]
        src: String,
        #[label("invalid scale definition")]
        err_span: SourceSpan,
        msg: String,
    },

    #[diagnostic(
        code(tincture::domain),
        url(docsrs),
        help("enable clamping or widen the scale domain")
    )]
    OutOfDomain {
        #[source_code]
        src: String,
        #[label("outside the scale domain")]
        err_span: SourceSpan,
        value: f64,
        min: f64,
        max: f64,
    },
}

pub type ColorResult<T> = miette::Result<T>;

impl Display for ColorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ColorError::Parse { msg, .. } => write!(f, "Color parse error: {}", msg),
            ColorError::Scale { msg, .. } => write!(f, "Color scale error: {}", msg),
            ColorError::OutOfDomain {
                value, min, max, ..
            } => write!(
                f,
                "Value {} is outside the scale domain [{}, {}]",
                value, min, max
            ),
        }
    }
}

impl Error for ColorError {}

impl ColorError {
    pub fn parse(
        src: impl Into<String>,
        err_span: impl Into<SourceSpan>,
        msg: impl Into<String>,
    ) -> Self {
        Self::Parse {
            src: src.into(),
            err_span: err_span.into(),
            msg: msg.into(),
        }
    }

    pub fn scale(
        src: impl Into<String>,
        err_span: impl Into<SourceSpan>,
        msg: impl Into<String>,
    ) -> Self {
        Self::Scale {
            src: src.into(),
            err_span: err_span.into(),
            msg: msg.into(),
        }
    }

    /// Builds an out-of-domain error, labelling the whole rendered value
    pub fn out_of_domain(value: f64, min: f64, max: f64) -> Self {
        let src = value.to_string();
        let err_span = (0, src.len());
        Self::OutOfDomain {
            src,
            err_span: err_span.into(),
            value,
            min,
            max,
        }
    }
}
