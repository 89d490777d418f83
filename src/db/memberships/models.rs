//! Channel and membership database models.

/// Channel visibility, stored as a single-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelType {
    /// Browsable by any team member. The only kind ever recommended.
    Open,
    Private,
    Direct,
    Group,
}

impl ChannelType {
    /// Storage code for this channel type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "O",
            Self::Private => "P",
            Self::Direct => "D",
            Self::Group => "G",
        }
    }

    /// Parse a storage code. Unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "O" => Some(Self::Open),
            "P" => Some(Self::Private),
            "D" => Some(Self::Direct),
            "G" => Some(Self::Group),
            _ => None,
        }
    }
}

/// A channel row.
#[derive(Debug, Clone)]
pub struct ChannelRecord {
    pub id: String,
    pub team_id: String,
    /// `None` when the stored code is not one we know.
    pub channel_type: Option<ChannelType>,
    pub name: String,
    pub display_name: String,
    /// Deletion time in epoch milliseconds, 0 while the channel is live.
    pub delete_at: i64,
}

impl ChannelRecord {
    /// Whether the channel could ever appear in a recommendation.
    pub fn is_discoverable(&self) -> bool {
        self.channel_type == Some(ChannelType::Open) && self.delete_at == 0
    }
}

/// A recommended channel, as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelData {
    pub name: String,
    pub display_name: String,
}

impl ChannelData {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_type_codes() {
        for kind in [
            ChannelType::Open,
            ChannelType::Private,
            ChannelType::Direct,
            ChannelType::Group,
        ] {
            assert_eq!(ChannelType::from_code(kind.as_str()), Some(kind));
        }
        assert_eq!(ChannelType::from_code("X"), None);
    }

    #[test]
    fn only_live_open_channels_are_discoverable() {
        let mut channel = ChannelRecord {
            id: "c1".to_string(),
            team_id: "t1".to_string(),
            channel_type: Some(ChannelType::Open),
            name: "general".to_string(),
            display_name: "General".to_string(),
            delete_at: 0,
        };
        assert!(channel.is_discoverable());

        channel.delete_at = 1_700_000_000_000;
        assert!(!channel.is_discoverable());

        channel.delete_at = 0;
        channel.channel_type = Some(ChannelType::Private);
        assert!(!channel.is_discoverable());

        channel.channel_type = None;
        assert!(!channel.is_discoverable());
    }
}
