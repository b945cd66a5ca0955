//! cosmwasm messages
//!
//! `v1` and `v1beta1` share field tags for every address we read, but they
//! are distinct message types and are dispatched separately.

pub mod v1 {
    address_message!(MsgStoreCode { sender = "1" });
    address_message!(MsgExecuteContract { sender = "1" });
    address_message!(MsgMigrateContract { sender = "1" });
    address_message!(MsgClearAdmin { sender = "1" });

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgInstantiateContract {
        #[prost(string, tag = "1")]
        pub sender: String,
        #[prost(string, tag = "2")]
        pub admin: String,
    }

    pub type MsgInstantiateContract2 = MsgInstantiateContract;

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgUpdateAdmin {
        #[prost(string, tag = "1")]
        pub sender: String,
        #[prost(string, tag = "2")]
        pub new_admin: String,
    }
}

pub mod v1beta1 {
    pub use super::v1::{
        MsgClearAdmin, MsgExecuteContract, MsgInstantiateContract, MsgMigrateContract,
        MsgStoreCode, MsgUpdateAdmin,
    };
}
