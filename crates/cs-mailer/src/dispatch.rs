/// Terminal status of one dispatch attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Accepted by the live transport
    Sent,
    /// Routed through the local fallback; nothing was delivered
    Simulated,
    /// The live transport rejected the call or was unreachable
    Failed,
}

/// What a send attempt produced.
///
/// Transport failures are folded in as [`DispatchOutcome::Failed`]; the
/// dispatcher never raises them as errors.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchResult {
    pub outcome: DispatchOutcome,

    /// User-facing status line
    pub message: String,

    /// Composed mail content, populated on the fallback path so harnesses
    /// can assert on the rendered subject and body
    pub rendered: Option<RenderedMail>,

    /// The verification code generated for this dispatch, when applicable
    pub code: Option<u32>,
}

/// A fully composed mail as the fallback path would have sent it
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}
