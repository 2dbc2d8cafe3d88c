//! Handler traits and the property adapter.
//!
//! The router stores handlers as trait objects: actions receive the raw
//! request, properties go through a typed adapter that expands a
//! getter/setter pair into the GET/POST wire behavior.

use core::fmt::Write as _;

use crate::error::HandlerError;
use crate::request::RpcRequest;
use crate::response::ResponseWriter;

/// An endpoint taking the raw request and formatting a text response.
pub trait Action {
    fn invoke(
        &self,
        request: &RpcRequest<'_>,
        out: &mut ResponseWriter<'_>,
    ) -> Result<(), HandlerError>;
}

impl<F> Action for F
where
    F: Fn(&RpcRequest<'_>, &mut ResponseWriter<'_>) -> Result<(), HandlerError>,
{
    fn invoke(
        &self,
        request: &RpcRequest<'_>,
        out: &mut ResponseWriter<'_>,
    ) -> Result<(), HandlerError> {
        self(request, out)
    }
}

/// A value with the canonical property text encoding: ASCII decimal,
/// unsigned, no sign; leading zeros and surrounding whitespace are
/// accepted on parse, formatting emits minimal decimal.
pub trait PropertyValue: Copy {
    fn parse(text: &str) -> Result<Self, HandlerError>;
    fn format(self, out: &mut ResponseWriter<'_>) -> Result<(), HandlerError>;
}

macro_rules! impl_property_value {
    ($($ty:ty),* $(,)?) => {$(
        impl PropertyValue for $ty {
            fn parse(text: &str) -> Result<Self, HandlerError> {
                let digits = text.trim_matches(|c: char| c.is_ascii_whitespace());
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(HandlerError::Parse);
                }
                let mut value: $ty = 0;
                for byte in digits.bytes() {
                    value = value
                        .checked_mul(10)
                        .and_then(|v| v.checked_add(<$ty>::from(byte - b'0')))
                        .ok_or(HandlerError::Parse)?;
                }
                Ok(value)
            }

            fn format(self, out: &mut ResponseWriter<'_>) -> Result<(), HandlerError> {
                write!(out, "{}", self)?;
                Ok(())
            }
        }
    )*};
}

impl_property_value!(u8, u16, u32);

/// A typed device attribute exposed as a paired read/write endpoint.
///
/// Setters whose change is externally visible are responsible for marking
/// the shared device state dirty; the adapter does not impose it.
pub trait Property {
    type Value: PropertyValue;

    fn get(&self) -> Self::Value;
    fn set(&self, value: Self::Value);
}

/// Object-safe wire form of [`Property`], stored in the route table.
pub trait PropertyHandler {
    /// GET: format the current value.
    fn read(&self, out: &mut ResponseWriter<'_>) -> Result<(), HandlerError>;

    /// POST: parse the body, apply it, echo what is now stored.
    fn write(&self, body: &[u8], out: &mut ResponseWriter<'_>) -> Result<(), HandlerError>;
}

impl<P: Property> PropertyHandler for P {
    fn read(&self, out: &mut ResponseWriter<'_>) -> Result<(), HandlerError> {
        self.get().format(out)
    }

    fn write(&self, body: &[u8], out: &mut ResponseWriter<'_>) -> Result<(), HandlerError> {
        let text = core::str::from_utf8(body).map_err(|_| HandlerError::Parse)?;
        let value = P::Value::parse(text)?;
        // Prove the echo fits before touching state, then report what the
        // setter actually stored (it may clamp).
        self.get().format(out)?;
        self.set(value);
        out.clear();
        self.get().format(out)
    }
}
