//! Status helper enums mapping to SMALLSERIAL/SMALLINT lookup tables.
//!
//! Each enum variant's discriminant matches the seed data order (1-based)
//! in the corresponding `*_statuses` database table.

/// Status ID type matching SMALLINT/SMALLSERIAL in the database.
pub type StatusId = i16;

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// Return the database status ID.
            pub fn id(self) -> StatusId {
                self as StatusId
            }
        }

        impl From<$name> for StatusId {
            fn from(value: $name) -> Self {
                value as StatusId
            }
        }
    };
}

define_status_enum! {
    /// Savings account lifecycle status.
    SavingsStatus {
        /// Accepting deposits toward the target.
        Active = 1,
        /// Verified deposits reached the target amount.
        Completed = 2,
        /// Closed by an administrative action before reaching the target.
        Cancelled = 3,
    }
}

define_status_enum! {
    /// Deposit transaction verification status. Verified and Rejected are
    /// terminal; a finalized deposit never re-enters Pending.
    DepositStatus {
        Pending = 1,
        Verified = 2,
        Rejected = 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn savings_status_ids_match_seed_data() {
        assert_eq!(SavingsStatus::Active.id(), 1);
        assert_eq!(SavingsStatus::Completed.id(), 2);
        assert_eq!(SavingsStatus::Cancelled.id(), 3);
    }

    #[test]
    fn deposit_status_ids_match_seed_data() {
        assert_eq!(DepositStatus::Pending.id(), 1);
        assert_eq!(DepositStatus::Verified.id(), 2);
        assert_eq!(DepositStatus::Rejected.id(), 3);
    }

    #[test]
    fn status_into_status_id() {
        let id: StatusId = DepositStatus::Verified.into();
        assert_eq!(id, 2);
    }
}
