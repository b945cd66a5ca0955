//! ibc-go messages: transfer, core relaying, relayer fees

pub mod transfer {
    address_message!(MsgTransfer { sender = "4" });
}

/// Channel handshake and packet relaying; each carries one relayer signer
pub mod channel {
    address_message!(MsgChannelOpenInit { signer = "3" });
    address_message!(MsgChannelOpenTry { signer = "7" });
    address_message!(MsgChannelOpenAck { signer = "7" });
    address_message!(MsgChannelOpenConfirm { signer = "5" });
    address_message!(MsgChannelCloseInit { signer = "3" });
    address_message!(MsgChannelCloseConfirm { signer = "5" });
    address_message!(MsgRecvPacket { signer = "4" });
    address_message!(MsgTimeout { signer = "5" });
    address_message!(MsgTimeoutOnClose { signer = "6" });
    address_message!(MsgAcknowledgement { signer = "5" });
}

pub mod client {
    address_message!(MsgCreateClient { signer = "3" });
    address_message!(MsgUpdateClient { signer = "3" });
    address_message!(MsgUpgradeClient { signer = "6" });
    address_message!(MsgSubmitMisbehaviour { signer = "3" });
}

pub mod connection {
    address_message!(MsgConnectionOpenInit { signer = "5" });
    address_message!(MsgConnectionOpenTry { signer = "12" });
    address_message!(MsgConnectionOpenAck { signer = "10" });
    address_message!(MsgConnectionOpenConfirm { signer = "4" });
}

pub mod fee {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgRegisterPayee {
        #[prost(string, tag = "3")]
        pub relayer: String,
        #[prost(string, tag = "4")]
        pub payee: String,
    }

    address_message!(MsgRegisterCounterpartyPayee { relayer = "3" });

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgPayPacketFee {
        #[prost(string, tag = "4")]
        pub signer: String,
        #[prost(string, repeated, tag = "5")]
        pub relayers: Vec<String>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct PacketFee {
        #[prost(string, tag = "2")]
        pub refund_address: String,
        #[prost(string, repeated, tag = "3")]
        pub relayers: Vec<String>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgPayPacketFeeAsync {
        #[prost(message, optional, tag = "2")]
        pub packet_fee: Option<PacketFee>,
    }
}
