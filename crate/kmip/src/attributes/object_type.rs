use crate::KmipSpec;

const OBJECT_TYPE_SPECS: &[KmipSpec] = &[
    KmipSpec::UnknownVersion,
    KmipSpec::V1_2,
    KmipSpec::V2_1,
    KmipSpec::V3_0,
];

open_enumeration! {
    /// The `Object Type` attribute: what kind of managed object this is.
    ObjectType(StandardObjectType, ObjectTypeValue) for OBJECT_TYPE_SPECS {
        always_present: true,
        server_initializable: true,
        client_initializable: false,
        server_modifiable: Never,
        client_modifiable: Never,
        client_deletable: false,
        multi_instance: false,
        values: {
            Certificate = 0x0000_0001, "Certificate", [UnknownVersion, V1_2, V2_1, V3_0];
            SymmetricKey = 0x0000_0002, "SymmetricKey", [UnknownVersion, V1_2, V2_1, V3_0];
            PublicKey = 0x0000_0003, "PublicKey", [UnknownVersion, V1_2, V2_1, V3_0];
            PrivateKey = 0x0000_0004, "PrivateKey", [UnknownVersion, V1_2, V2_1, V3_0];
            SplitKey = 0x0000_0005, "SplitKey", [UnknownVersion, V1_2, V2_1, V3_0];
            Template = 0x0000_0006, "Template", [UnknownVersion, V1_2, V2_1];
            SecretData = 0x0000_0007, "SecretData", [UnknownVersion, V1_2, V2_1, V3_0];
            OpaqueObject = 0x0000_0008, "OpaqueObject", [UnknownVersion, V1_2, V2_1, V3_0];
            PgpKey = 0x0000_0009, "PgpKey", [UnknownVersion, V1_2, V2_1, V3_0];
            CertificateRequest = 0x0000_000A, "CertificateRequest", [UnknownVersion, V2_1, V3_0];
            User = 0x0000_000B, "User", [UnknownVersion, V3_0];
            Group = 0x0000_000C, "Group", [UnknownVersion, V3_0];
            PasswordCredential = 0x0000_000D, "PasswordCredential", [UnknownVersion, V3_0];
            DeviceCredential = 0x0000_000E, "DeviceCredential", [UnknownVersion, V3_0];
            OneTimePasswordCredential = 0x0000_000F, "OneTimePasswordCredential", [UnknownVersion, V3_0];
            HashedPasswordCredential = 0x0000_0010, "HashedPasswordCredential", [UnknownVersion, V3_0];
        },
    }
}
