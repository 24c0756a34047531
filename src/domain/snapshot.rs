/// A stored copy of a subscription's feed document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub subscription_name: String,
    pub source_address: String,
    pub document: Vec<u8>,
    pub fetched_at: Option<String>,
}

impl Snapshot {
    pub fn new(subscription_name: String, source_address: String, document: Vec<u8>) -> Self {
        Self {
            subscription_name,
            source_address,
            document,
            fetched_at: None,
        }
    }
}
