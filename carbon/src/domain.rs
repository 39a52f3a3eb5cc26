use std::collections::HashMap;

/// Point-in-time copy of the cache contents
pub type Snapshot = HashMap<String, String>;

pub mod response {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct GetResponse {
        pub found: bool,
        pub value: String,
    }

    impl GetResponse {
        pub fn hit(value: impl Into<String>) -> Self {
            Self {
                found: true,
                value: value.into(),
            }
        }

        /// Absent key: empty value, `found == false`
        pub fn miss() -> Self {
            Self {
                found: false,
                value: String::new(),
            }
        }

        pub fn into_option(self) -> Option<String> {
            self.found.then_some(self.value)
        }
    }
}

pub use response::GetResponse;
