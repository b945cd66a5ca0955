//! provenance module messages (address-bearing fields only)

pub mod marker {
    use crate::proto::ibc::transfer::MsgTransfer;

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct AccessGrant {
        #[prost(string, tag = "1")]
        pub address: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgWithdrawRequest {
        #[prost(string, tag = "2")]
        pub administrator: String,
        #[prost(string, tag = "3")]
        pub to_address: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgAddMarkerRequest {
        #[prost(string, tag = "3")]
        pub manager: String,
        #[prost(string, tag = "4")]
        pub from_address: String,
        #[prost(message, repeated, tag = "7")]
        pub access_list: Vec<AccessGrant>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgAddAccessRequest {
        #[prost(string, tag = "2")]
        pub administrator: String,
        #[prost(message, repeated, tag = "3")]
        pub access: Vec<AccessGrant>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgDeleteAccessRequest {
        #[prost(string, tag = "2")]
        pub administrator: String,
        #[prost(string, tag = "3")]
        pub removed_address: String,
    }

    address_message!(
        /// Layout of every marker request acting only as its administrator
        MsgFinalizeRequest { administrator = "2" }
    );

    pub type MsgActivateRequest = MsgFinalizeRequest;
    pub type MsgCancelRequest = MsgFinalizeRequest;
    pub type MsgDeleteRequest = MsgFinalizeRequest;
    pub type MsgMintRequest = MsgFinalizeRequest;
    pub type MsgBurnRequest = MsgFinalizeRequest;
    pub type MsgSetDenomMetadataRequest = MsgFinalizeRequest;

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgTransferRequest {
        #[prost(string, tag = "3")]
        pub administrator: String,
        #[prost(string, tag = "4")]
        pub from_address: String,
        #[prost(string, tag = "5")]
        pub to_address: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgIbcTransferRequest {
        #[prost(message, optional, tag = "1")]
        pub transfer: Option<MsgTransfer>,
        #[prost(string, tag = "2")]
        pub administrator: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgGrantAllowanceRequest {
        #[prost(string, tag = "2")]
        pub administrator: String,
        #[prost(string, tag = "3")]
        pub grantee: String,
    }
}

pub mod name {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct NameRecord {
        #[prost(string, tag = "1")]
        pub name: String,
        #[prost(string, tag = "2")]
        pub address: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgBindNameRequest {
        #[prost(message, optional, tag = "1")]
        pub parent: Option<NameRecord>,
        #[prost(message, optional, tag = "2")]
        pub record: Option<NameRecord>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgDeleteNameRequest {
        #[prost(message, optional, tag = "1")]
        pub record: Option<NameRecord>,
    }
}

pub mod attribute {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgAddAttributeRequest {
        #[prost(string, tag = "4")]
        pub account: String,
        #[prost(string, tag = "5")]
        pub owner: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgUpdateAttributeRequest {
        #[prost(string, tag = "6")]
        pub account: String,
        #[prost(string, tag = "7")]
        pub owner: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgDeleteAttributeRequest {
        #[prost(string, tag = "2")]
        pub account: String,
        #[prost(string, tag = "3")]
        pub owner: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgDeleteDistinctAttributeRequest {
        #[prost(string, tag = "3")]
        pub account: String,
        #[prost(string, tag = "4")]
        pub owner: String,
    }
}

pub mod metadata {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Party {
        #[prost(string, tag = "1")]
        pub address: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Scope {
        #[prost(message, repeated, tag = "3")]
        pub owners: Vec<Party>,
        #[prost(string, repeated, tag = "4")]
        pub data_access: Vec<String>,
        #[prost(string, tag = "5")]
        pub value_owner_address: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgWriteScopeRequest {
        #[prost(message, optional, tag = "1")]
        pub scope: Option<Scope>,
        #[prost(string, repeated, tag = "2")]
        pub signers: Vec<String>,
    }

    address_message!(
        /// Layout of every metadata request carrying only signers at tag 2
        MsgDeleteScopeRequest { repeated signers = "2" }
    );

    pub type MsgDeleteRecordRequest = MsgDeleteScopeRequest;
    pub type MsgDeleteScopeSpecificationRequest = MsgDeleteScopeRequest;
    pub type MsgDeleteContractSpecificationRequest = MsgDeleteScopeRequest;
    pub type MsgWriteRecordSpecificationRequest = MsgDeleteScopeRequest;
    pub type MsgDeleteRecordSpecificationRequest = MsgDeleteScopeRequest;
    pub type MsgWriteP8eContractSpecRequest = MsgDeleteScopeRequest;

    address_message!(
        /// Layout of the contract spec link/unlink requests
        MsgAddContractSpecToScopeSpecRequest { repeated signers = "3" }
    );

    pub type MsgDeleteContractSpecFromScopeSpecRequest = MsgAddContractSpecToScopeSpecRequest;

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgAddScopeDataAccessRequest {
        #[prost(string, repeated, tag = "2")]
        pub data_access: Vec<String>,
        #[prost(string, repeated, tag = "3")]
        pub signers: Vec<String>,
    }

    pub type MsgDeleteScopeDataAccessRequest = MsgAddScopeDataAccessRequest;

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgAddScopeOwnerRequest {
        #[prost(message, repeated, tag = "2")]
        pub owners: Vec<Party>,
        #[prost(string, repeated, tag = "3")]
        pub signers: Vec<String>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgDeleteScopeOwnerRequest {
        #[prost(string, repeated, tag = "2")]
        pub owners: Vec<String>,
        #[prost(string, repeated, tag = "3")]
        pub signers: Vec<String>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Session {
        #[prost(message, repeated, tag = "3")]
        pub parties: Vec<Party>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgWriteSessionRequest {
        #[prost(message, optional, tag = "1")]
        pub session: Option<Session>,
        #[prost(string, repeated, tag = "2")]
        pub signers: Vec<String>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgWriteRecordRequest {
        #[prost(string, repeated, tag = "2")]
        pub signers: Vec<String>,
        #[prost(message, repeated, tag = "5")]
        pub parties: Vec<Party>,
    }

    /// Scope and contract specifications both carry owners at tag 3
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Specification {
        #[prost(string, repeated, tag = "3")]
        pub owner_addresses: Vec<String>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgWriteScopeSpecificationRequest {
        #[prost(message, optional, tag = "1")]
        pub specification: Option<Specification>,
        #[prost(string, repeated, tag = "2")]
        pub signers: Vec<String>,
    }

    pub type MsgWriteContractSpecificationRequest = MsgWriteScopeSpecificationRequest;

    address_message!(MsgP8eMemorializeContractRequest { invoker = "7" });

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct ObjectStoreLocator {
        #[prost(string, tag = "1")]
        pub owner: String,
    }

    /// Layout of the bind, delete and modify locator requests
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgBindOSLocatorRequest {
        #[prost(message, optional, tag = "1")]
        pub locator: Option<ObjectStoreLocator>,
    }

    pub type MsgDeleteOSLocatorRequest = MsgBindOSLocatorRequest;
    pub type MsgModifyOSLocatorRequest = MsgBindOSLocatorRequest;
}
