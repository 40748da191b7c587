use crate::KmipSpec;

const CRYPTOGRAPHIC_ALGORITHM_SPECS: &[KmipSpec] = &[
    KmipSpec::UnknownVersion,
    KmipSpec::V1_2,
    KmipSpec::V2_1,
    KmipSpec::V3_0,
];

open_enumeration! {
    /// The `Cryptographic Algorithm` attribute of keys and certificates.
    CryptographicAlgorithm(StandardCryptographicAlgorithm, CryptographicAlgorithmValue)
        for CRYPTOGRAPHIC_ALGORITHM_SPECS
    {
        always_present: false,
        server_initializable: true,
        client_initializable: true,
        server_modifiable: Never,
        client_modifiable: Never,
        client_deletable: false,
        multi_instance: false,
        values: {
            Des = 0x0000_0001, "DES", [UnknownVersion, V1_2, V2_1, V3_0];
            TripleDes = 0x0000_0002, "Triple DES (3DES)", [UnknownVersion, V1_2, V2_1, V3_0];
            Aes = 0x0000_0003, "AES", [UnknownVersion, V1_2, V2_1, V3_0];
            Rsa = 0x0000_0004, "RSA", [UnknownVersion, V1_2, V2_1, V3_0];
            Dsa = 0x0000_0005, "DSA", [UnknownVersion, V1_2, V2_1, V3_0];
            Ecdsa = 0x0000_0006, "ECDSA", [UnknownVersion, V1_2, V2_1, V3_0];
            HmacSha1 = 0x0000_0007, "HMAC-SHA1", [UnknownVersion, V1_2, V2_1, V3_0];
            HmacSha224 = 0x0000_0008, "HMAC-SHA224", [UnknownVersion, V1_2, V2_1, V3_0];
            HmacSha256 = 0x0000_0009, "HMAC-SHA256", [UnknownVersion, V1_2, V2_1, V3_0];
            HmacSha384 = 0x0000_000A, "HMAC-SHA384", [UnknownVersion, V1_2, V2_1, V3_0];
            HmacSha512 = 0x0000_000B, "HMAC-SHA512", [UnknownVersion, V1_2, V2_1, V3_0];
            HmacMd5 = 0x0000_000C, "HMAC-MD5", [UnknownVersion, V1_2, V2_1, V3_0];
            Dh = 0x0000_000D, "Diffie-Hellman (DH)", [UnknownVersion, V1_2, V2_1, V3_0];
            Ecdh = 0x0000_000E, "Elliptic Curve Diffie-Hellman (ECDH)", [UnknownVersion, V1_2, V2_1, V3_0];
            Ecmqv = 0x0000_000F, "Elliptic Curve Menezes-Qu-Vanstone (ECMQV)", [UnknownVersion, V1_2, V2_1, V3_0];
        },
    }
}
