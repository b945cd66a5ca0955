//! cosmos-sdk module messages (address-bearing fields only)

pub mod bank {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgSend {
        #[prost(string, tag = "1")]
        pub from_address: String,
        #[prost(string, tag = "2")]
        pub to_address: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Input {
        #[prost(string, tag = "1")]
        pub address: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Output {
        #[prost(string, tag = "1")]
        pub address: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgMultiSend {
        #[prost(message, repeated, tag = "1")]
        pub inputs: Vec<Input>,
        #[prost(message, repeated, tag = "2")]
        pub outputs: Vec<Output>,
    }
}

pub mod distribution {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgSetWithdrawAddress {
        #[prost(string, tag = "1")]
        pub delegator_address: String,
        #[prost(string, tag = "2")]
        pub withdraw_address: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgWithdrawDelegatorReward {
        #[prost(string, tag = "1")]
        pub delegator_address: String,
        #[prost(string, tag = "2")]
        pub validator_address: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgWithdrawValidatorCommission {
        #[prost(string, tag = "1")]
        pub validator_address: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgFundCommunityPool {
        #[prost(string, tag = "2")]
        pub depositor: String,
    }
}

pub mod evidence {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgSubmitEvidence {
        #[prost(string, tag = "1")]
        pub submitter: String,
    }
}

pub mod gov {
    /// Vote, weighted vote and deposit share their layout across versions
    pub mod v1beta1 {
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgSubmitProposal {
            #[prost(string, tag = "3")]
            pub proposer: String,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgVote {
            #[prost(uint64, tag = "1")]
            pub proposal_id: u64,
            #[prost(string, tag = "2")]
            pub voter: String,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgVoteWeighted {
            #[prost(uint64, tag = "1")]
            pub proposal_id: u64,
            #[prost(string, tag = "2")]
            pub voter: String,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgDeposit {
            #[prost(uint64, tag = "1")]
            pub proposal_id: u64,
            #[prost(string, tag = "2")]
            pub depositor: String,
        }
    }

    pub mod v1 {
        use crate::proto::MessageEnvelope;

        pub use super::v1beta1::{MsgDeposit, MsgVote, MsgVoteWeighted};

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgSubmitProposal {
            #[prost(message, repeated, tag = "1")]
            pub messages: Vec<MessageEnvelope>,
            #[prost(string, tag = "3")]
            pub proposer: String,
        }
    }
}

pub mod upgrade {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgSoftwareUpgrade {
        #[prost(string, tag = "1")]
        pub authority: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgCancelUpgrade {
        #[prost(string, tag = "1")]
        pub authority: String,
    }
}

pub mod slashing {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgUnjail {
        #[prost(string, tag = "1")]
        pub validator_addr: String,
    }
}

pub mod staking {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgCreateValidator {
        #[prost(string, tag = "4")]
        pub delegator_address: String,
        #[prost(string, tag = "5")]
        pub validator_address: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgEditValidator {
        #[prost(string, tag = "2")]
        pub validator_address: String,
    }

    /// Also the layout of MsgUndelegate and MsgCancelUnbondingDelegation
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgDelegate {
        #[prost(string, tag = "1")]
        pub delegator_address: String,
        #[prost(string, tag = "2")]
        pub validator_address: String,
    }

    pub type MsgUndelegate = MsgDelegate;
    pub type MsgCancelUnbondingDelegation = MsgDelegate;

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgBeginRedelegate {
        #[prost(string, tag = "1")]
        pub delegator_address: String,
        #[prost(string, tag = "2")]
        pub validator_src_address: String,
        #[prost(string, tag = "3")]
        pub validator_dst_address: String,
    }
}

pub mod vesting {
    /// Shared by the continuous, permanent locked and periodic variants
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgCreateVestingAccount {
        #[prost(string, tag = "1")]
        pub from_address: String,
        #[prost(string, tag = "2")]
        pub to_address: String,
    }

    pub type MsgCreatePermanentLockedAccount = MsgCreateVestingAccount;
    pub type MsgCreatePeriodicVestingAccount = MsgCreateVestingAccount;
}

pub mod authz {
    use crate::proto::MessageEnvelope;

    /// Layout of MsgGrant and MsgRevoke
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgGrant {
        #[prost(string, tag = "1")]
        pub granter: String,
        #[prost(string, tag = "2")]
        pub grantee: String,
    }

    pub type MsgRevoke = MsgGrant;

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgExec {
        #[prost(string, tag = "1")]
        pub grantee: String,
        #[prost(message, repeated, tag = "2")]
        pub msgs: Vec<MessageEnvelope>,
    }
}

pub mod feegrant {
    /// Layout of MsgGrantAllowance and MsgRevokeAllowance
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgGrantAllowance {
        #[prost(string, tag = "1")]
        pub granter: String,
        #[prost(string, tag = "2")]
        pub grantee: String,
    }

    pub type MsgRevokeAllowance = MsgGrantAllowance;
}

pub mod group {
    use crate::proto::MessageEnvelope;

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MemberRequest {
        #[prost(string, tag = "1")]
        pub address: String,
    }

    /// Layout of MsgCreateGroup and MsgCreateGroupWithPolicy
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgCreateGroup {
        #[prost(string, tag = "1")]
        pub admin: String,
        #[prost(message, repeated, tag = "2")]
        pub members: Vec<MemberRequest>,
    }

    pub type MsgCreateGroupWithPolicy = MsgCreateGroup;

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgUpdateGroupMembers {
        #[prost(string, tag = "1")]
        pub admin: String,
        #[prost(message, repeated, tag = "3")]
        pub member_updates: Vec<MemberRequest>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgUpdateGroupAdmin {
        #[prost(string, tag = "1")]
        pub admin: String,
        #[prost(string, tag = "3")]
        pub new_admin: String,
    }

    /// Layout of MsgUpdateGroupMetadata and MsgCreateGroupPolicy
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgUpdateGroupMetadata {
        #[prost(string, tag = "1")]
        pub admin: String,
    }

    pub type MsgCreateGroupPolicy = MsgUpdateGroupMetadata;

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgUpdateGroupPolicyAdmin {
        #[prost(string, tag = "1")]
        pub admin: String,
        #[prost(string, tag = "2")]
        pub group_policy_address: String,
        #[prost(string, tag = "3")]
        pub new_admin: String,
    }

    /// Layout of the decision policy and metadata updates
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgUpdateGroupPolicyMetadata {
        #[prost(string, tag = "1")]
        pub admin: String,
        #[prost(string, tag = "2")]
        pub group_policy_address: String,
    }

    pub type MsgUpdateGroupPolicyDecisionPolicy = MsgUpdateGroupPolicyMetadata;

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgSubmitProposal {
        #[prost(string, tag = "1")]
        pub group_policy_address: String,
        #[prost(string, repeated, tag = "2")]
        pub proposers: Vec<String>,
        #[prost(message, repeated, tag = "4")]
        pub messages: Vec<MessageEnvelope>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgWithdrawProposal {
        #[prost(uint64, tag = "1")]
        pub proposal_id: u64,
        #[prost(string, tag = "2")]
        pub address: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgVote {
        #[prost(uint64, tag = "1")]
        pub proposal_id: u64,
        #[prost(string, tag = "2")]
        pub voter: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgExec {
        #[prost(uint64, tag = "1")]
        pub proposal_id: u64,
        #[prost(string, tag = "2")]
        pub executor: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgLeaveGroup {
        #[prost(string, tag = "1")]
        pub address: String,
    }
}

pub mod nft {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgSend {
        #[prost(string, tag = "3")]
        pub sender: String,
        #[prost(string, tag = "4")]
        pub receiver: String,
    }
}
