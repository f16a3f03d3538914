//! Optional observability helpers for token exchanges.
//!
//! Enable the `tracing` feature to emit structured spans named
//! `oauth_handshake.exchange` with `flow` (protocol version) and `stage`
//! (operation) fields. Without the feature every helper compiles to a noop.

// self
use crate::_prelude::*;

/// Exchange stages observed by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExchangeStage {
	/// OAuth 1.0a request-token exchange.
	RequestToken,
	/// Access-token exchange (both protocol versions).
	AccessToken,
	/// Request signing.
	SignRequest,
}
impl ExchangeStage {
	/// Returns a stable label suitable for span fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ExchangeStage::RequestToken => "request_token",
			ExchangeStage::AccessToken => "access_token",
			ExchangeStage::SignRequest => "sign_request",
		}
	}
}
impl Display for ExchangeStage {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedExchange<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedExchange<F> = F;

/// A span builder used around token exchanges and signing.
#[derive(Clone, Debug)]
pub struct ExchangeSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl ExchangeSpan {
	/// Creates a new span tagged with the protocol flow and stage.
	pub fn new(flow: &'static str, stage: ExchangeStage) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span =
				tracing::info_span!("oauth_handshake.exchange", flow, stage = stage.as_str());

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (flow, stage);

			Self {}
		}
	}

	/// Enters the span for synchronous sections.
	pub fn entered(self) -> ExchangeSpanGuard {
		#[cfg(feature = "tracing")]
		{
			ExchangeSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			ExchangeSpanGuard {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedExchange<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// RAII guard returned by [`ExchangeSpan::entered`].
pub struct ExchangeSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for ExchangeSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("ExchangeSpanGuard(..)")
	}
}
