use std::fmt::Display;

/// Failure to map a decoded discriminator onto a variant.
///
/// Returned by [`Discriminator::resolve`](crate::Discriminator::resolve).
/// Callers match on the variant rather than the message text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The tag value does not name any known variant.
    #[error("unknown discriminator {tag:?}{}", expected_suffix(.expected))]
    UnknownDiscriminator {
        tag: String,
        expected: &'static [&'static str],
    },

    /// A routing field needed to pick the variant was absent.
    #[error("missing routing field '{field}'")]
    MissingField { field: &'static str },

    /// Any other domain-specific resolution failure.
    #[error("{0}")]
    Custom(String),
}

impl ResolveError {
    pub fn unknown(tag: impl Into<String>, expected: &'static [&'static str]) -> Self {
        ResolveError::UnknownDiscriminator {
            tag: tag.into(),
            expected,
        }
    }

    pub fn missing(field: &'static str) -> Self {
        ResolveError::MissingField { field }
    }

    pub fn custom(message: impl Display) -> Self {
        ResolveError::Custom(message.to_string())
    }
}

fn expected_suffix(expected: &[&str]) -> String {
    match expected {
        [] => String::new(),
        [only] => format!(", expected {:?}", only),
        many => {
            let names: Vec<String> = many.iter().map(|name| format!("{:?}", name)).collect();
            format!(", expected one of {}", names.join(", "))
        }
    }
}

/// The step of a two-pass decode at which it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// First pass: document into the discriminator type.
    Discriminator,
    /// Mapping the decoded discriminator onto a variant.
    Resolve,
    /// Second pass: document into the resolved variant type.
    Variant,
}

/// Errors from decoding a [`Discriminated`](crate::Discriminated) value.
///
/// Codec errors are carried unchanged as the source of the phase that
/// produced them.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The document is not valid for the codec, or does not fit the
    /// discriminator's declared shape.
    #[error("malformed document: {0}")]
    MalformedDocument(#[source] serde_json::Error),

    /// The discriminator could not be mapped onto a variant.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The second pass into the resolved variant failed.
    #[error("failed to decode variant {variant}: {source}")]
    VariantDecodeFailure {
        variant: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl DecodeError {
    pub fn phase(&self) -> Phase {
        match self {
            DecodeError::MalformedDocument(_) => Phase::Discriminator,
            DecodeError::Resolve(_) => Phase::Resolve,
            DecodeError::VariantDecodeFailure { .. } => Phase::Variant,
        }
    }

    pub fn is_unknown_discriminator(&self) -> bool {
        matches!(
            self,
            DecodeError::Resolve(ResolveError::UnknownDiscriminator { .. })
        )
    }

    /// The resolution error, if the decode failed while resolving.
    pub fn resolve_error(&self) -> Option<&ResolveError> {
        match self {
            DecodeError::Resolve(err) => Some(err),
            _ => None,
        }
    }

    /// Convert into the error type of an enclosing serde deserializer.
    ///
    /// Unknown tags with a known expected set are reported through
    /// `unknown_variant` so the outer codec phrases them natively.
    pub(crate) fn into_de_error<E: serde::de::Error>(self) -> E {
        match self {
            DecodeError::Resolve(ResolveError::UnknownDiscriminator { tag, expected })
                if !expected.is_empty() =>
            {
                E::unknown_variant(&tag, expected)
            }
            other => E::custom(other),
        }
    }
}
