/// Watch-only wallet session. Connected means an address has been accepted;
/// nothing is signed and no keys are held.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalletSession {
    address: Option<String>,
}

impl WalletSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session pre-connected from config. Invalid addresses are ignored.
    pub fn from_config(address: Option<&str>) -> Self {
        let mut session = Self::new();
        if let Some(addr) = address {
            if let Err(e) = session.connect(addr) {
                tracing::warn!("Ignoring configured wallet address: {e}");
            }
        }
        session
    }

    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn connect(&mut self, input: &str) -> Result<(), WalletError> {
        let addr = parse_address(input)?;
        tracing::info!(address = %addr, "Wallet connected");
        self.address = Some(addr);
        Ok(())
    }

    pub fn disconnect(&mut self) {
        if self.address.take().is_some() {
            tracing::info!("Wallet disconnected");
        }
    }
}

/// Accepts `0x` followed by 40 hex digits and normalizes to lowercase.
pub fn parse_address(input: &str) -> Result<String, WalletError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(WalletError::Empty);
    }
    let hex = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .ok_or_else(|| WalletError::Malformed(trimmed.to_string()))?;
    if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(WalletError::Malformed(trimmed.to_string()));
    }
    Ok(format!("0x{}", hex.to_ascii_lowercase()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    Empty,
    Malformed(String),
}

impl std::fmt::Display for WalletError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WalletError::Empty => write!(f, "no address entered"),
            WalletError::Malformed(a) => write!(f, "not a valid address: {a}"),
        }
    }
}

impl std::error::Error for WalletError {}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0x1234567890ABCDEF1234567890abcdef12345678";

    #[test]
    fn starts_disconnected() {
        let session = WalletSession::new();
        assert!(!session.is_connected());
        assert!(session.address().is_none());
    }

    #[test]
    fn connect_normalizes() {
        let mut session = WalletSession::new();
        session.connect(&format!("  {ADDR} ")).unwrap();
        assert!(session.is_connected());
        assert_eq!(
            session.address(),
            Some("0x1234567890abcdef1234567890abcdef12345678")
        );
    }

    #[test]
    fn rejects_bad_input() {
        let mut session = WalletSession::new();
        assert_eq!(session.connect("   "), Err(WalletError::Empty));
        assert!(matches!(session.connect("1234"), Err(WalletError::Malformed(_))));
        assert!(matches!(session.connect("0x12zz"), Err(WalletError::Malformed(_))));
        assert!(!session.is_connected());
    }

    #[test]
    fn failed_connect_keeps_existing_session() {
        let mut session = WalletSession::new();
        session.connect(ADDR).unwrap();
        assert!(session.connect("nope").is_err());
        assert!(session.is_connected());
    }

    #[test]
    fn disconnect_clears() {
        let mut session = WalletSession::from_config(Some(ADDR));
        assert!(session.is_connected());
        session.disconnect();
        assert!(!session.is_connected());
    }

    #[test]
    fn invalid_config_address_stays_disconnected() {
        assert!(!WalletSession::from_config(Some("garbage")).is_connected());
        assert!(!WalletSession::from_config(None).is_connected());
    }
}
