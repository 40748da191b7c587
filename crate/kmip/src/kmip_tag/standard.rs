//! Standard KMIP tags with the protocol versions each one is valid for.

standard_tags! {
    ActivationDate = 0x42_0001, "ActivationDate", [Unknown, V1_2, V2_1, V3_0];
    ApplicationData = 0x42_0002, "ApplicationData", [Unknown, V1_2, V2_1, V3_0];
    ApplicationNamespace = 0x42_0003, "ApplicationNamespace", [Unknown, V1_2, V2_1, V3_0];
    ApplicationSpecificInformation = 0x42_0004, "ApplicationSpecificInformation", [Unknown, V1_2, V2_1, V3_0];
    ArchiveDate = 0x42_0005, "ArchiveDate", [Unknown, V1_2, V2_1, V3_0];
    AsynchronousCorrelationValue = 0x42_0006, "AsynchronousCorrelationValue", [Unknown, V1_2, V2_1, V3_0];
    AsynchronousIndicator = 0x42_0007, "AsynchronousIndicator", [Unknown, V1_2, V2_1, V3_0];
    Attribute = 0x42_0008, "Attribute", [Unknown, V1_2, V2_1, V3_0];
    AttributeIndex = 0x42_0009, "AttributeIndex", [Unknown, V1_2];
    AttributeName = 0x42_000A, "AttributeName", [Unknown, V1_2, V2_1, V3_0];
    AttributeValue = 0x42_000B, "AttributeValue", [Unknown, V1_2, V2_1, V3_0];
    Authentication = 0x42_000C, "Authentication", [Unknown, V1_2, V2_1, V3_0];
    BatchCount = 0x42_000D, "BatchCount", [Unknown, V1_2, V2_1];
    BatchErrorContinuationOption = 0x42_000E, "BatchErrorContinuationOption", [Unknown, V1_2, V2_1, V3_0];
    BatchItem = 0x42_000F, "BatchItem", [Unknown, V1_2, V2_1, V3_0];
    BatchOrderOption = 0x42_0010, "BatchOrderOption", [Unknown, V1_2, V2_1];
    BlockCipherMode = 0x42_0011, "BlockCipherMode", [Unknown, V1_2, V2_1, V3_0];
    CancellationResult = 0x42_0012, "CancellationResult", [Unknown, V1_2, V2_1, V3_0];
    Certificate = 0x42_0013, "Certificate", [Unknown, V1_2, V2_1, V3_0];
    CertificateRequest = 0x42_0018, "CertificateRequest", [Unknown, V1_2, V2_1, V3_0];
    CertificateRequestType = 0x42_0019, "CertificateRequestType", [Unknown, V1_2, V2_1, V3_0];
    CertificateType = 0x42_001D, "CertificateType", [Unknown, V1_2, V2_1, V3_0];
    CertificateValue = 0x42_001E, "CertificateValue", [Unknown, V1_2, V2_1, V3_0];
    CommonTemplateAttribute = 0x42_001F, "CommonTemplateAttribute", [Unknown, V1_2];
    CompromiseDate = 0x42_0020, "CompromiseDate", [Unknown, V1_2, V2_1, V3_0];
    CompromiseOccurrenceDate = 0x42_0021, "CompromiseOccurrenceDate", [Unknown, V1_2, V2_1, V3_0];
    ContactInformation = 0x42_0022, "ContactInformation", [Unknown, V1_2, V2_1, V3_0];
    Credential = 0x42_0023, "Credential", [Unknown, V1_2, V2_1, V3_0];
    CredentialType = 0x42_0024, "CredentialType", [Unknown, V1_2, V2_1, V3_0];
    CredentialValue = 0x42_0025, "CredentialValue", [Unknown, V1_2, V2_1, V3_0];
    CriticalityIndicator = 0x42_0026, "CriticalityIndicator", [Unknown, V1_2, V2_1, V3_0];
    CrtCoefficient = 0x42_0027, "CrtCoefficient", [Unknown, V1_2, V2_1, V3_0];
    CryptographicAlgorithm = 0x42_0028, "CryptographicAlgorithm", [Unknown, V1_2, V2_1, V3_0];
    CryptographicDomainParameters = 0x42_0029, "CryptographicDomainParameters", [Unknown, V1_2, V2_1, V3_0];
    CryptographicLength = 0x42_002A, "CryptographicLength", [Unknown, V1_2, V2_1, V3_0];
    CryptographicParameters = 0x42_002B, "CryptographicParameters", [Unknown, V1_2, V2_1, V3_0];
    CryptographicUsageMask = 0x42_002C, "CryptographicUsageMask", [Unknown, V1_2, V2_1, V3_0];
    CustomAttribute = 0x42_002D, "Custom", [Unknown, V1_2];
    D = 0x42_002E, "D", [Unknown, V1_2, V2_1, V3_0];
    DeactivationDate = 0x42_002F, "DeactivationDate", [Unknown, V1_2, V2_1, V3_0];
    DerivationData = 0x42_0030, "DerivationData", [Unknown, V1_2, V2_1, V3_0];
    DerivationMethod = 0x42_0031, "DerivationMethod", [Unknown, V1_2, V2_1, V3_0];
    DerivationParameters = 0x42_0032, "DerivationParameters", [Unknown, V1_2, V2_1, V3_0];
    DestroyDate = 0x42_0033, "DestroyDate", [Unknown, V1_2, V2_1, V3_0];
    Digest = 0x42_0034, "Digest", [Unknown, V1_2, V2_1, V3_0];
    DigestValue = 0x42_0035, "DigestValue", [Unknown, V1_2, V2_1, V3_0];
    EncryptionKeyInformation = 0x42_0036, "EncryptionKeyInformation", [Unknown, V1_2, V2_1, V3_0];
    G = 0x42_0037, "G", [Unknown, V1_2, V2_1, V3_0];
    HashingAlgorithm = 0x42_0038, "HashingAlgorithm", [Unknown, V1_2, V2_1, V3_0];
    InitialDate = 0x42_0039, "InitialDate", [Unknown, V1_2, V2_1, V3_0];
    InitializationVector = 0x42_003A, "InitializationVector", [Unknown, V1_2, V2_1, V3_0];
    IterationCount = 0x42_003C, "IterationCount", [Unknown, V1_2, V2_1, V3_0];
    IvCounterNonce = 0x42_003D, "IvCounterNonce", [Unknown, V1_2, V2_1, V3_0];
    J = 0x42_003E, "J", [Unknown, V1_2, V2_1, V3_0];
    Key = 0x42_003F, "Key", [Unknown, V1_2, V2_1, V3_0];
    KeyBlock = 0x42_0040, "KeyBlock", [Unknown, V1_2, V2_1, V3_0];
    KeyCompressionType = 0x42_0041, "KeyCompressionType", [Unknown, V1_2, V2_1, V3_0];
    KeyFormatType = 0x42_0042, "KeyFormatType", [Unknown, V1_2, V2_1, V3_0];
    KeyMaterial = 0x42_0043, "KeyMaterial", [Unknown, V1_2, V2_1, V3_0];
    KeyPartIdentifier = 0x42_0044, "KeyPartIdentifier", [Unknown, V1_2, V2_1, V3_0];
    KeyValue = 0x42_0045, "KeyValue", [Unknown, V1_2, V2_1, V3_0];
    KeyWrappingData = 0x42_0046, "KeyWrappingData", [Unknown, V1_2, V2_1, V3_0];
    KeyWrappingSpecification = 0x42_0047, "KeyWrappingSpecification", [Unknown, V1_2, V2_1, V3_0];
    LastChangeDate = 0x42_0048, "LastChangeDate", [Unknown, V1_2, V2_1, V3_0];
    LeaseTime = 0x42_0049, "LeaseTime", [Unknown, V1_2, V2_1, V3_0];
    Link = 0x42_004A, "Link", [Unknown, V1_2, V2_1];
    LinkType = 0x42_004B, "LinkType", [Unknown, V1_2, V2_1];
    LinkedObjectIdentifier = 0x42_004C, "LinkedObjectIdentifier", [Unknown, V1_2, V2_1];
    MacSignature = 0x42_004D, "MacSignature", [Unknown, V1_2, V2_1, V3_0];
    MacSignatureKeyInformation = 0x42_004E, "MacSignatureKeyInformation", [Unknown, V1_2, V2_1, V3_0];
    MaximumItems = 0x42_004F, "MaximumItems", [Unknown, V1_2, V2_1, V3_0];
    MaximumResponseSize = 0x42_0050, "MaximumResponseSize", [Unknown, V1_2, V2_1, V3_0];
    MessageExtension = 0x42_0051, "MessageExtension", [Unknown, V1_2, V2_1, V3_0];
    Modulus = 0x42_0052, "Modulus", [Unknown, V1_2, V2_1, V3_0];
    Name = 0x42_0053, "Name", [Unknown, V1_2, V2_1, V3_0];
    NameType = 0x42_0054, "NameType", [Unknown, V1_2, V2_1];
    NameValue = 0x42_0055, "NameValue", [Unknown, V1_2, V2_1];
    ObjectGroup = 0x42_0056, "ObjectGroup", [Unknown, V1_2, V2_1];
    ObjectType = 0x42_0057, "ObjectType", [Unknown, V1_2, V2_1, V3_0];
    Offset = 0x42_0058, "Offset", [Unknown, V1_2, V2_1, V3_0];
    OpaqueDataType = 0x42_0059, "OpaqueDataType", [Unknown, V1_2, V2_1, V3_0];
    OpaqueDataValue = 0x42_005A, "OpaqueDataValue", [Unknown, V1_2, V2_1, V3_0];
    OpaqueObject = 0x42_005B, "OpaqueObject", [Unknown, V1_2, V2_1, V3_0];
    Operation = 0x42_005C, "Operation", [Unknown, V1_2, V2_1, V3_0];
    OperationPolicyName = 0x42_005D, "OperationPolicyName", [Unknown, V1_2];
    P = 0x42_005E, "P", [Unknown, V1_2, V2_1, V3_0];
    PaddingMethod = 0x42_005F, "PaddingMethod", [Unknown, V1_2, V2_1, V3_0];
    PrimeExponentP = 0x42_0060, "PrimeExponentP", [Unknown, V1_2, V2_1, V3_0];
    PrimeExponentQ = 0x42_0061, "PrimeExponentQ", [Unknown, V1_2, V2_1, V3_0];
    PrimeFieldSize = 0x42_0062, "PrimeFieldSize", [Unknown, V1_2, V2_1, V3_0];
    PrivateExponent = 0x42_0063, "PrivateExponent", [Unknown, V1_2, V2_1, V3_0];
    PrivateKey = 0x42_0064, "PrivateKey", [Unknown, V1_2, V2_1, V3_0];
    PrivateKeyTemplateAttribute = 0x42_0065, "PrivateKeyTemplateAttribute", [Unknown, V1_2];
    PrivateKeyUniqueIdentifier = 0x42_0066, "PrivateKeyUniqueIdentifier", [Unknown, V1_2, V2_1, V3_0];
    ProcessStartDate = 0x42_0067, "ProcessStartDate", [Unknown, V1_2, V2_1, V3_0];
    ProtectStopDate = 0x42_0068, "ProtectStopDate", [Unknown, V1_2, V2_1, V3_0];
    ProtocolVersion = 0x42_0069, "ProtocolVersion", [Unknown, V1_2, V2_1, V3_0];
    ProtocolVersionMajor = 0x42_006A, "ProtocolVersionMajor", [Unknown, V1_2, V2_1, V3_0];
    ProtocolVersionMinor = 0x42_006B, "ProtocolVersionMinor", [Unknown, V1_2, V2_1, V3_0];
    PublicExponent = 0x42_006C, "PublicExponent", [Unknown, V1_2, V2_1, V3_0];
    PublicKey = 0x42_006D, "PublicKey", [Unknown, V1_2, V2_1, V3_0];
    PublicKeyTemplateAttribute = 0x42_006E, "PublicKeyTemplateAttribute", [Unknown, V1_2];
    PublicKeyUniqueIdentifier = 0x42_006F, "PublicKeyUniqueIdentifier", [Unknown, V1_2, V2_1, V3_0];
    PutFunction = 0x42_0070, "PutFunction", [Unknown, V1_2, V2_1, V3_0];
    Q = 0x42_0071, "Q", [Unknown, V1_2, V2_1, V3_0];
    QString = 0x42_0072, "QString", [Unknown, V1_2, V2_1, V3_0];
    Qlength = 0x42_0073, "Qlength", [Unknown, V1_2, V2_1, V3_0];
    QueryFunction = 0x42_0074, "QueryFunction", [Unknown, V1_2, V2_1, V3_0];
    RecommendedCurve = 0x42_0075, "RecommendedCurve", [Unknown, V1_2, V2_1, V3_0];
    ReplacedUniqueIdentifier = 0x42_0076, "ReplacedUniqueIdentifier", [Unknown, V1_2, V2_1, V3_0];
    RequestHeader = 0x42_0077, "RequestHeader", [Unknown, V1_2, V2_1, V3_0];
    RequestMessage = 0x42_0078, "RequestMessage", [Unknown, V1_2, V2_1, V3_0];
    RequestPayload = 0x42_0079, "RequestPayload", [Unknown, V1_2, V2_1, V3_0];
    ResponseHeader = 0x42_007A, "ResponseHeader", [Unknown, V1_2, V2_1, V3_0];
    ResponseMessage = 0x42_007B, "ResponseMessage", [Unknown, V1_2, V2_1, V3_0];
    ResponsePayload = 0x42_007C, "ResponsePayload", [Unknown, V1_2, V2_1, V3_0];
    ResultMessage = 0x42_007D, "ResultMessage", [Unknown, V1_2, V2_1, V3_0];
    ResultReason = 0x42_007E, "ResultReason", [Unknown, V1_2, V2_1, V3_0];
    ResultStatus = 0x42_007F, "ResultStatus", [Unknown, V1_2, V2_1, V3_0];
    RevocationMessage = 0x42_0080, "RevocationMessage", [Unknown, V1_2, V2_1, V3_0];
    RevocationReason = 0x42_0081, "RevocationReason", [Unknown, V1_2, V2_1, V3_0];
    RevocationReasonCode = 0x42_0082, "RevocationReasonCode", [Unknown, V1_2, V2_1, V3_0];
    KeyRoleType = 0x42_0083, "KeyRoleType", [Unknown, V1_2, V2_1, V3_0];
    Salt = 0x42_0084, "Salt", [Unknown, V1_2, V2_1, V3_0];
    SecretData = 0x42_0085, "SecretData", [Unknown, V1_2, V2_1, V3_0];
    SecretDataType = 0x42_0086, "SecretDataType", [Unknown, V1_2, V2_1, V3_0];
    ServerInformation = 0x42_0088, "ServerInformation", [Unknown, V1_2, V2_1, V3_0];
    SplitKey = 0x42_0089, "SplitKey", [Unknown, V1_2, V2_1, V3_0];
    SplitKeyMethod = 0x42_008A, "SplitKeyMethod", [Unknown, V1_2, V2_1, V3_0];
    SplitKeyParts = 0x42_008B, "SplitKeyParts", [Unknown, V1_2, V2_1, V3_0];
    SplitKeyThreshold = 0x42_008C, "SplitKeyThreshold", [Unknown, V1_2, V2_1, V3_0];
    State = 0x42_008D, "State", [Unknown, V1_2, V2_1, V3_0];
    StorageStatusMask = 0x42_008E, "StorageStatusMask", [Unknown, V1_2, V2_1, V3_0];
    SymmetricKey = 0x42_008F, "SymmetricKey", [Unknown, V1_2, V2_1, V3_0];
    Template = 0x42_0090, "Template", [Unknown, V1_2];
    TemplateAttribute = 0x42_0091, "TemplateAttribute", [Unknown, V1_2];
    TimeStamp = 0x42_0092, "TimeStamp", [Unknown, V1_2, V2_1, V3_0];
    UniqueBatchItemId = 0x42_0093, "UniqueBatchItemId", [Unknown, V1_2, V2_1];
    UniqueIdentifier = 0x42_0094, "UniqueIdentifier", [Unknown, V1_2, V2_1, V3_0];
    UsageLimits = 0x42_0095, "UsageLimits", [Unknown, V1_2, V2_1, V3_0];
    UsageLimitsCount = 0x42_0096, "UsageLimitsCount", [Unknown, V1_2, V2_1, V3_0];
    UsageLimitsTotal = 0x42_0097, "UsageLimitsTotal", [Unknown, V1_2, V2_1, V3_0];
    UsageLimitsUnit = 0x42_0098, "UsageLimitsUnit", [Unknown, V1_2, V2_1, V3_0];
    Username = 0x42_0099, "Username", [Unknown, V1_2, V2_1, V3_0];
    ValidityDate = 0x42_009A, "ValidityDate", [Unknown, V1_2, V2_1, V3_0];
    ValidityIndicator = 0x42_009B, "ValidityIndicator", [Unknown, V1_2, V2_1, V3_0];
    VendorExtension = 0x42_009C, "VendorExtension", [Unknown, V1_2, V2_1, V3_0];
    VendorIdentification = 0x42_009D, "VendorIdentification", [Unknown, V1_2, V2_1, V3_0];
    WrappingMethod = 0x42_009E, "WrappingMethod", [Unknown, V1_2, V2_1, V3_0];
    X = 0x42_009F, "X", [Unknown, V1_2, V2_1, V3_0];
    Y = 0x42_00A0, "Y", [Unknown, V1_2, V2_1, V3_0];
    Password = 0x42_00A1, "Password", [Unknown, V1_2, V2_1, V3_0];
    DeviceIdentifier = 0x42_00A2, "DeviceIdentifier", [Unknown, V1_2, V2_1, V3_0];
    EncodingOption = 0x42_00A3, "EncodingOption", [Unknown, V1_2, V2_1, V3_0];
    ExtensionInformation = 0x42_00A4, "ExtensionInformation", [Unknown, V1_2, V2_1, V3_0];
    ExtensionName = 0x42_00A5, "ExtensionName", [Unknown, V1_2, V2_1, V3_0];
    ExtensionTag = 0x42_00A6, "ExtensionTag", [Unknown, V1_2, V2_1, V3_0];
    ExtensionType = 0x42_00A7, "ExtensionType", [Unknown, V1_2, V2_1, V3_0];
    Fresh = 0x42_00A8, "Fresh", [Unknown, V1_2, V2_1, V3_0];
    MachineIdentifier = 0x42_00A9, "MachineIdentifier", [Unknown, V1_2, V2_1, V3_0];
    MediaIdentifier = 0x42_00AA, "MediaIdentifier", [Unknown, V1_2, V2_1, V3_0];
    NetworkIdentifier = 0x42_00AB, "NetworkIdentifier", [Unknown, V1_2, V2_1, V3_0];
    ObjectGroupMember = 0x42_00AC, "ObjectGroupMember", [Unknown, V1_2, V2_1];
    CertificateLength = 0x42_00AD, "CertificateLength", [Unknown, V1_2, V2_1, V3_0];
    DigitalSignatureAlgorithm = 0x42_00AE, "DigitalSignatureAlgorithm", [Unknown, V1_2, V2_1, V3_0];
    CertificateSerialNumber = 0x42_00AF, "CertificateSerialNumber", [Unknown, V1_2, V2_1, V3_0];
    DeviceSerialNumber = 0x42_00B0, "DeviceSerialNumber", [Unknown, V1_2, V2_1, V3_0];
    IssuerAlternativeName = 0x42_00B1, "IssuerAlternativeName", [Unknown, V1_2, V2_1, V3_0];
    IssuerDistinguishedName = 0x42_00B2, "IssuerDistinguishedName", [Unknown, V1_2, V2_1, V3_0];
    SubjectAlternativeName = 0x42_00B3, "SubjectAlternativeName", [Unknown, V1_2, V2_1, V3_0];
    SubjectDistinguishedName = 0x42_00B4, "SubjectDistinguishedName", [Unknown, V1_2, V2_1, V3_0];
    X509CertificateIdentifier = 0x42_00B5, "X509CertificateIdentifier", [Unknown, V1_2, V2_1, V3_0];
    X509CertificateIssuer = 0x42_00B6, "X509CertificateIssuer", [Unknown, V1_2, V2_1, V3_0];
    X509CertificateSubject = 0x42_00B7, "X509CertificateSubject", [Unknown, V1_2, V2_1, V3_0];
    KeyValueLocation = 0x42_00B8, "KeyValueLocation", [Unknown, V1_2, V2_1, V3_0];
    KeyValueLocationValue = 0x42_00B9, "KeyValueLocationValue", [Unknown, V1_2, V2_1, V3_0];
    KeyValueLocationType = 0x42_00BA, "KeyValueLocationType", [Unknown, V1_2, V2_1, V3_0];
    KeyValuePresent = 0x42_00BB, "KeyValuePresent", [Unknown, V1_2, V2_1, V3_0];
    OriginalCreationDate = 0x42_00BC, "OriginalCreationDate", [Unknown, V1_2, V2_1, V3_0];
    PgpKey = 0x42_00BD, "PgpKey", [Unknown, V1_2, V2_1, V3_0];
    PgpKeyVersion = 0x42_00BE, "PgpKeyVersion", [Unknown, V1_2, V2_1, V3_0];
    AlternativeName = 0x42_00BF, "AlternativeName", [Unknown, V1_2, V2_1, V3_0];
    AlternativeNameValue = 0x42_00C0, "AlternativeNameValue", [Unknown, V1_2, V2_1, V3_0];
    AlternativeNameType = 0x42_00C1, "AlternativeNameType", [Unknown, V1_2, V2_1, V3_0];
    Data = 0x42_00C2, "Data", [Unknown, V1_2, V2_1, V3_0];
    SignatureData = 0x42_00C3, "SignatureData", [Unknown, V1_2, V2_1, V3_0];
    DataLength = 0x42_00C4, "DataLength", [Unknown, V1_2, V2_1, V3_0];
    RandomIv = 0x42_00C5, "RandomIv", [Unknown, V1_2, V2_1, V3_0];
    MacData = 0x42_00C6, "MacData", [Unknown, V1_2, V2_1, V3_0];
    AttestationType = 0x42_00C7, "AttestationType", [Unknown, V1_2, V2_1, V3_0];
    Nonce = 0x42_00C8, "Nonce", [Unknown, V1_2, V2_1, V3_0];
    NonceId = 0x42_00C9, "NonceId", [Unknown, V1_2, V2_1, V3_0];
    NonceValue = 0x42_00CA, "NonceValue", [Unknown, V1_2, V2_1, V3_0];
    AttestationMeasurement = 0x42_00CB, "AttestationMeasurement", [Unknown, V1_2, V2_1, V3_0];
    AttestationAssertion = 0x42_00CC, "AttestationAssertion", [Unknown, V1_2, V2_1, V3_0];
    IvLength = 0x42_00CD, "IvLength", [Unknown, V1_2, V2_1, V3_0];
    TagLength = 0x42_00CE, "TagLength", [Unknown, V1_2, V2_1, V3_0];
    FixedFieldLength = 0x42_00CF, "FixedFieldLength", [Unknown, V1_2, V2_1, V3_0];
    CounterLength = 0x42_00D0, "CounterLength", [Unknown, V1_2, V2_1, V3_0];
    InitialCounterValue = 0x42_00D1, "InitialCounterValue", [Unknown, V1_2, V2_1, V3_0];
    InvocationFieldLength = 0x42_00D2, "InvocationFieldLength", [Unknown, V1_2, V2_1, V3_0];
    AttestationCapableIndicator = 0x42_00D3, "AttestationCapableIndicator", [Unknown, V1_2, V2_1, V3_0];
    OffsetItems = 0x42_00D4, "OffsetItems", [Unknown, V2_1, V3_0];
    LocatedItems = 0x42_00D5, "LocatedItems", [Unknown, V2_1, V3_0];
    CorrelationValue = 0x42_00D6, "CorrelationValue", [Unknown, V2_1, V3_0];
    InitIndicator = 0x42_00D7, "InitIndicator", [Unknown, V2_1, V3_0];
    FinalIndicator = 0x42_00D8, "FinalIndicator", [Unknown, V2_1, V3_0];
    RngParameters = 0x42_00D9, "RngParameters", [Unknown, V2_1, V3_0];
    RngAlgorithm = 0x42_00DA, "RngAlgorithm", [Unknown, V2_1, V3_0];
    DrbgAlgorithm = 0x42_00DB, "DrbgAlgorithm", [Unknown, V2_1, V3_0];
    Fips186Variation = 0x42_00DC, "Fips186Variation", [Unknown, V2_1, V3_0];
    PredictionResistance = 0x42_00DD, "PredictionResistance", [Unknown, V2_1, V3_0];
    RandomNumberGenerator = 0x42_00DE, "RandomNumberGenerator", [Unknown, V2_1, V3_0];
    ValidationInformation = 0x42_00DF, "ValidationInformation", [Unknown, V2_1, V3_0];
    ValidationAuthorityType = 0x42_00E0, "ValidationAuthorityType", [Unknown, V2_1, V3_0];
    ValidationAuthorityCountry = 0x42_00E1, "ValidationAuthorityCountry", [Unknown, V2_1, V3_0];
    ValidationAuthorityUri = 0x42_00E2, "ValidationAuthorityUri", [Unknown, V2_1, V3_0];
    ValidationVersionMajor = 0x42_00E3, "ValidationVersionMajor", [Unknown, V2_1, V3_0];
    ValidationVersionMinor = 0x42_00E4, "ValidationVersionMinor", [Unknown, V2_1, V3_0];
    ValidationType = 0x42_00E5, "ValidationType", [Unknown, V2_1, V3_0];
    ValidationLevel = 0x42_00E6, "ValidationLevel", [Unknown, V2_1, V3_0];
    ValidationCertificateIdentifier = 0x42_00E7, "ValidationCertificateIdentifier", [Unknown, V2_1, V3_0];
    ValidationCertificateUri = 0x42_00E8, "ValidationCertificateUri", [Unknown, V2_1, V3_0];
    ValidationVendorUri = 0x42_00E9, "ValidationVendorUri", [Unknown, V2_1, V3_0];
    ValidationProfile = 0x42_00EA, "ValidationProfile", [Unknown, V2_1, V3_0];
    ProfileInformation = 0x42_00EB, "ProfileInformation", [Unknown, V2_1, V3_0];
    ProfileName = 0x42_00EC, "ProfileName", [Unknown, V2_1, V3_0];
    ServerUri = 0x42_00ED, "ServerUri", [Unknown, V2_1, V3_0];
    ServerPort = 0x42_00EE, "ServerPort", [Unknown, V2_1, V3_0];
    StreamingCapability = 0x42_00EF, "StreamingCapability", [Unknown, V2_1, V3_0];
    AsynchronousCapability = 0x42_00F0, "AsynchronousCapability", [Unknown, V2_1, V3_0];
    AttestationCapability = 0x42_00F1, "AttestationCapability", [Unknown, V2_1, V3_0];
    UnwrapMode = 0x42_00F2, "UnwrapMode", [Unknown, V2_1, V3_0];
    DestroyAction = 0x42_00F3, "DestroyAction", [Unknown, V2_1, V3_0];
    ShreddingAlgorithm = 0x42_00F4, "ShreddingAlgorithm", [Unknown, V2_1, V3_0];
    RngMode = 0x42_00F5, "RngMode", [Unknown, V2_1, V3_0];
    ClientRegistrationMethod = 0x42_00F6, "ClientRegistrationMethod", [Unknown, V2_1, V3_0];
    CapabilityInformation = 0x42_00F7, "CapabilityInformation", [Unknown, V2_1, V3_0];
    KeyWrapType = 0x42_00F8, "KeyWrapType", [Unknown, V2_1, V3_0];
    BatchUndoCapability = 0x42_00F9, "BatchUndoCapability", [Unknown, V2_1, V3_0];
    BatchContinueCapability = 0x42_00FA, "BatchContinueCapability", [Unknown, V2_1, V3_0];
    Pkcs12FriendlyName = 0x42_00FB, "Pkcs12FriendlyName", [Unknown, V2_1, V3_0];
    Description = 0x42_00FC, "Description", [Unknown, V2_1, V3_0];
    Comment = 0x42_00FD, "Comment", [Unknown, V2_1, V3_0];
    AuthenticatedEncryptionAdditionalData = 0x42_00FE, "AuthenticatedEncryptionAdditionalData", [Unknown, V2_1, V3_0];
    AuthenticatedEncryptionTag = 0x42_00FF, "AuthenticatedEncryptionTag", [Unknown, V2_1, V3_0];
    SaltLength = 0x42_0100, "SaltLength", [Unknown, V2_1, V3_0];
    MaskGenerator = 0x42_0101, "MaskGenerator", [Unknown, V2_1, V3_0];
    MaskGeneratorHashingAlgorithm = 0x42_0102, "MaskGeneratorHashingAlgorithm", [Unknown, V2_1, V3_0];
    PSource = 0x42_0103, "PSource", [Unknown, V2_1, V3_0];
    TrailerField = 0x42_0104, "TrailerField", [Unknown, V2_1, V3_0];
    ClientCorrelationValue = 0x42_0105, "ClientCorrelationValue", [Unknown, V2_1, V3_0];
    ServerCorrelationValue = 0x42_0106, "ServerCorrelationValue", [Unknown, V2_1, V3_0];
    DigestedData = 0x42_0107, "DigestedData", [Unknown, V2_1, V3_0];
    CertificateSubjectCn = 0x42_0108, "CertificateSubjectCn", [Unknown, V2_1, V3_0];
    CertificateSubjectO = 0x42_0109, "CertificateSubjectO", [Unknown, V2_1, V3_0];
    CertificateSubjectOu = 0x42_010A, "CertificateSubjectOu", [Unknown, V2_1, V3_0];
    CertificateSubjectEmail = 0x42_010B, "CertificateSubjectEmail", [Unknown, V2_1, V3_0];
    CertificateSubjectC = 0x42_010C, "CertificateSubjectC", [Unknown, V2_1, V3_0];
    CertificateSubjectSt = 0x42_010D, "CertificateSubjectSt", [Unknown, V2_1, V3_0];
    CertificateSubjectL = 0x42_010E, "CertificateSubjectL", [Unknown, V2_1, V3_0];
    CertificateSubjectUid = 0x42_010F, "CertificateSubjectUid", [Unknown, V2_1, V3_0];
    CertificateSubjectSerialNumber = 0x42_0110, "CertificateSubjectSerialNumber", [Unknown, V2_1, V3_0];
    CertificateSubjectTitle = 0x42_0111, "CertificateSubjectTitle", [Unknown, V2_1, V3_0];
    CertificateSubjectDc = 0x42_0112, "CertificateSubjectDc", [Unknown, V2_1, V3_0];
    CertificateSubjectDnQualifier = 0x42_0113, "CertificateSubjectDnQualifier", [Unknown, V2_1, V3_0];
    CertificateIssuerCn = 0x42_0114, "CertificateIssuerCn", [Unknown, V2_1, V3_0];
    CertificateIssuerO = 0x42_0115, "CertificateIssuerO", [Unknown, V2_1, V3_0];
    CertificateIssuerOu = 0x42_0116, "CertificateIssuerOu", [Unknown, V2_1, V3_0];
    CertificateIssuerEmail = 0x42_0117, "CertificateIssuerEmail", [Unknown, V2_1, V3_0];
    CertificateIssuerC = 0x42_0118, "CertificateIssuerC", [Unknown, V2_1, V3_0];
    CertificateIssuerSt = 0x42_0119, "CertificateIssuerSt", [Unknown, V2_1, V3_0];
    CertificateIssuerL = 0x42_011A, "CertificateIssuerL", [Unknown, V2_1, V3_0];
    CertificateIssuerUid = 0x42_011B, "CertificateIssuerUid", [Unknown, V2_1, V3_0];
    CertificateIssuerSerialNumber = 0x42_011C, "CertificateIssuerSerialNumber", [Unknown, V2_1, V3_0];
    CertificateIssuerTitle = 0x42_011D, "CertificateIssuerTitle", [Unknown, V2_1, V3_0];
    CertificateIssuerDc = 0x42_011E, "CertificateIssuerDc", [Unknown, V2_1, V3_0];
    CertificateIssuerDnQualifier = 0x42_011F, "CertificateIssuerDnQualifier", [Unknown, V2_1, V3_0];
    Sensitive = 0x42_0120, "Sensitive", [Unknown, V2_1, V3_0];
    AlwaysSensitive = 0x42_0121, "AlwaysSensitive", [Unknown, V2_1, V3_0];
    Extractable = 0x42_0122, "Extractable", [Unknown, V2_1, V3_0];
    NeverExtractable = 0x42_0123, "NeverExtractable", [Unknown, V2_1, V3_0];
    ReplaceExisting = 0x42_0124, "ReplaceExisting", [Unknown, V2_1, V3_0];
    Attributes = 0x42_0125, "Attributes", [Unknown, V2_1, V3_0];
    CommonAttributes = 0x42_0126, "CommonAttributes", [Unknown, V2_1, V3_0];
    PrivateKeyAttributes = 0x42_0127, "PrivateKeyAttributes", [Unknown, V2_1, V3_0];
    PublicKeyAttributes = 0x42_0128, "PublicKeyAttributes", [Unknown, V2_1, V3_0];
    ExtensionEnumeration = 0x42_0129, "ExtensionEnumeration", [Unknown, V2_1, V3_0];
    ExtensionAttribute = 0x42_012A, "ExtensionAttribute", [Unknown, V2_1, V3_0];
    ExtensionParentStructureTag = 0x42_012B, "ExtensionParentStructureTag", [Unknown, V2_1, V3_0];
    ExtensionDescription = 0x42_012C, "ExtensionDescription", [Unknown, V2_1, V3_0];
    ServerName = 0x42_012D, "ServerName", [Unknown, V2_1, V3_0];
    ServerSerialNumber = 0x42_012E, "ServerSerialNumber", [Unknown, V2_1, V3_0];
    ServerVersion = 0x42_012F, "ServerVersion", [Unknown, V2_1, V3_0];
    ServerLoad = 0x42_0130, "ServerLoad", [Unknown, V2_1, V3_0];
    ProductName = 0x42_0131, "ProductName", [Unknown, V2_1, V3_0];
    BuildLevel = 0x42_0132, "BuildLevel", [Unknown, V2_1, V3_0];
    BuildDate = 0x42_0133, "BuildDate", [Unknown, V2_1, V3_0];
    ClusterInfo = 0x42_0134, "ClusterInfo", [Unknown, V2_1, V3_0];
    AlternateFailoverEndpoints = 0x42_0135, "AlternateFailoverEndpoints", [Unknown, V2_1, V3_0];
    ShortUniqueIdentifier = 0x42_0136, "ShortUniqueIdentifier", [Unknown, V2_1, V3_0];
    Tag = 0x42_0138, "Tag", [Unknown, V2_1, V3_0];
    CertificateRequestUniqueIdentifier = 0x42_0139, "CertificateRequestUniqueIdentifier", [Unknown, V2_1, V3_0];
    NistKeyType = 0x42_013A, "NistKeyType", [Unknown, V2_1, V3_0];
    AttributeReference = 0x42_013B, "AttributeReference", [Unknown, V2_1, V3_0];
    CurrentAttribute = 0x42_013C, "CurrentAttribute", [Unknown, V2_1, V3_0];
    NewAttribute = 0x42_013D, "NewAttribute", [Unknown, V2_1, V3_0];
    CertificateRequestValue = 0x42_0140, "CertificateRequestValue", [Unknown, V2_1, V3_0];
    LogMessage = 0x42_0141, "LogMessage", [Unknown, V2_1, V3_0];
    ProfileVersion = 0x42_0142, "ProfileVersion", [Unknown, V2_1, V3_0];
    ProfileVersionMajor = 0x42_0143, "ProfileVersionMajor", [Unknown, V2_1, V3_0];
    ProfileVersionMinor = 0x42_0144, "ProfileVersionMinor", [Unknown, V2_1, V3_0];
    ProtectionLevel = 0x42_0145, "ProtectionLevel", [Unknown, V2_1, V3_0];
    ProtectionPeriod = 0x42_0146, "ProtectionPeriod", [Unknown, V2_1, V3_0];
    QuantumSafe = 0x42_0147, "QuantumSafe", [Unknown, V2_1, V3_0];
    QuantumSafeCapability = 0x42_0148, "QuantumSafeCapability", [Unknown, V2_1, V3_0];
    Ticket = 0x42_0149, "Ticket", [Unknown, V2_1, V3_0];
    TicketType = 0x42_014A, "TicketType", [Unknown, V2_1, V3_0];
    TicketValue = 0x42_014B, "TicketValue", [Unknown, V2_1, V3_0];
    RequestCount = 0x42_014C, "RequestCount", [Unknown, V2_1, V3_0];
    Rights = 0x42_014D, "Rights", [Unknown, V2_1, V3_0];
    Objects = 0x42_014E, "Objects", [Unknown, V2_1, V3_0];
    Operations = 0x42_014F, "Operations", [Unknown, V2_1, V3_0];
    Right = 0x42_0150, "Right", [Unknown, V2_1, V3_0];
    EndpointRole = 0x42_0151, "EndpointRole", [Unknown, V2_1, V3_0];
    DefaultsInformation = 0x42_0152, "DefaultsInformation", [Unknown, V2_1, V3_0];
    ObjectDefaults = 0x42_0153, "ObjectDefaults", [Unknown, V2_1, V3_0];
    Ephemeral = 0x42_0154, "Ephemeral", [Unknown, V2_1, V3_0];
    ServerHashedPassword = 0x42_0155, "ServerHashedPassword", [Unknown, V2_1, V3_0];
    OneTimePassword = 0x42_0156, "OneTimePassword", [Unknown, V2_1, V3_0];
    HashedPassword = 0x42_0157, "HashedPassword", [Unknown, V2_1, V3_0];
    AdjustmentType = 0x42_0158, "AdjustmentType", [Unknown, V2_1, V3_0];
    Pkcs11Interface = 0x42_0159, "Pkcs11Interface", [Unknown, V2_1, V3_0];
    Pkcs11Function = 0x42_015A, "Pkcs11Function", [Unknown, V2_1, V3_0];
    Pkcs11InputParameters = 0x42_015B, "Pkcs11InputParameters", [Unknown, V2_1, V3_0];
    Pkcs11OutputParameters = 0x42_015C, "Pkcs11OutputParameters", [Unknown, V2_1, V3_0];
    Pkcs11ReturnCode = 0x42_015D, "Pkcs11ReturnCode", [Unknown, V2_1, V3_0];
    ProtectionStorageMask = 0x42_015E, "ProtectionStorageMask", [Unknown, V2_1, V3_0];
    ProtectionStorageMasks = 0x42_015F, "ProtectionStorageMasks", [Unknown, V2_1, V3_0];
    InteropFunction = 0x42_0160, "InteropFunction", [Unknown, V2_1, V3_0];
    InteropIdentifier = 0x42_0161, "InteropIdentifier", [Unknown, V2_1, V3_0];
    AdjustmentValue = 0x42_0162, "AdjustmentValue", [Unknown, V2_1, V3_0];
    CommonProtectionStorageMasks = 0x42_0163, "CommonProtectionStorageMasks", [Unknown, V2_1, V3_0];
    PrivateProtectionStorageMasks = 0x42_0164, "PrivateProtectionStorageMasks", [Unknown, V2_1, V3_0];
    PublicProtectionStorageMasks = 0x42_0165, "PublicProtectionStorageMasks", [Unknown, V2_1, V3_0];
    ObjectGroups = 0x42_0166, "ObjectGroups", [Unknown, V2_1, V3_0];
    ObjectTypes = 0x42_0167, "ObjectTypes", [Unknown, V2_1, V3_0];
    Constraints = 0x42_0168, "Constraints", [Unknown, V2_1, V3_0];
    Constraint = 0x42_0169, "Constraint", [Unknown, V2_1, V3_0];
    RotateInterval = 0x42_016A, "RotateInterval", [Unknown, V2_1, V3_0];
    RotateAutomatic = 0x42_016B, "RotateAutomatic", [Unknown, V2_1, V3_0];
    RotateOffset = 0x42_016C, "RotateOffset", [Unknown, V2_1, V3_0];
    RotateDate = 0x42_016D, "RotateDate", [Unknown, V2_1, V3_0];
    RotateGeneration = 0x42_016E, "RotateGeneration", [Unknown, V2_1, V3_0];
    RotateName = 0x42_016F, "RotateName", [Unknown, V2_1, V3_0];
    RotateNameValue = 0x42_0170, "RotateNameValue", [Unknown, V2_1];
    RotateNameType = 0x42_0171, "RotateNameType", [Unknown, V2_1];
    RotateLatest = 0x42_0172, "RotateLatest", [Unknown, V2_1, V3_0];
    AsynchronousRequest = 0x42_0173, "AsynchronousRequest", [Unknown, V2_1, V3_0];
    SubmissionDate = 0x42_0174, "SubmissionDate", [Unknown, V2_1, V3_0];
    ProcessingStage = 0x42_0175, "ProcessingStage", [Unknown, V2_1, V3_0];
    AsynchronousCorrelationValues = 0x42_0176, "AsynchronousCorrelationValues", [Unknown, V2_1, V3_0];
    CertificateLink = 0x42_0190, "CertificateLink", [Unknown, V3_0];
    ChildLink = 0x42_0191, "ChildLink", [Unknown, V3_0];
    DerivationObjectLink = 0x42_0192, "DerivationObjectLink", [Unknown, V3_0];
    DerivedObjectLink = 0x42_0193, "DerivedObjectLink", [Unknown, V3_0];
    NextLink = 0x42_0194, "NextLink", [Unknown, V3_0];
    ParentLink = 0x42_0195, "ParentLink", [Unknown, V3_0];
    Pkcs12CertificateLink = 0x42_0196, "Pkcs12CertificateLink", [Unknown, V3_0];
    Pkcs12PasswordLink = 0x42_0197, "Pkcs12PasswordLink", [Unknown, V3_0];
    PreviousLink = 0x42_0198, "PreviousLink", [Unknown, V3_0];
    PrivateKeyLink = 0x42_0199, "PrivateKeyLink", [Unknown, V3_0];
    PublicKeyLink = 0x42_019A, "PublicKeyLink", [Unknown, V3_0];
    ReplacedObjectLink = 0x42_019B, "ReplacedObjectLink", [Unknown, V3_0];
    ReplacementObjectLink = 0x42_019C, "ReplacementObjectLink", [Unknown, V3_0];
    WrappingKeyLink = 0x42_019D, "WrappingKeyLink", [Unknown, V3_0];
    ObjectClass = 0x42_019E, "ObjectClass", [Unknown, V3_0];
    ObjectClassMask = 0x42_019F, "ObjectClassMask", [Unknown, V3_0];
    CredentialLink = 0x42_01A0, "CredentialLink", [Unknown, V3_0];
    PasswordCredential = 0x42_01A1, "PasswordCredential", [Unknown, V3_0];
    PasswordSalt = 0x42_01A2, "PasswordSalt", [Unknown, V3_0];
    PasswordSaltAlgorithm = 0x42_01A3, "PasswordSaltAlgorithm", [Unknown, V3_0];
    SaltedPassword = 0x42_01A4, "SaltedPassword", [Unknown, V3_0];
    PasswordLink = 0x42_01A5, "PasswordLink", [Unknown, V3_0];
    DeviceCredential = 0x42_01A6, "DeviceCredential", [Unknown, V3_0];
    OtpCredential = 0x42_01A7, "OtpCredential", [Unknown, V3_0];
    OtpAlgorithm = 0x42_01A8, "OtpAlgorithm", [Unknown, V3_0];
    OtpDigest = 0x42_01A9, "OtpDigest", [Unknown, V3_0];
    OtpSerial = 0x42_01AA, "OtpSerial", [Unknown, V3_0];
    OtpSeed = 0x42_01AB, "OtpSeed", [Unknown, V3_0];
    OtpInterval = 0x42_01AC, "OtpInterval", [Unknown, V3_0];
    OtpDigits = 0x42_01AD, "OtpDigits", [Unknown, V3_0];
    OtpCounter = 0x42_01AE, "OtpCounter", [Unknown, V3_0];
    HashedPasswordCredential = 0x42_01AF, "HashedPasswordCredential", [Unknown, V3_0];
    HashedUsernamePassword = 0x42_01B0, "HashedUsernamePassword", [Unknown, V3_0];
    HashedPasswordUsername = 0x42_01B1, "HashedPasswordUsername", [Unknown, V3_0];
    CredentialInformation = 0x42_01B2, "CredentialInformation", [Unknown, V3_0];
    GroupLink = 0x42_01B3, "GroupLink", [Unknown, V3_0];
    SplitKeyBaseLink = 0x42_01B4, "SplitKeyBaseLink", [Unknown, V3_0];
    JoinedSplitKeyPartsLink = 0x42_01B5, "JoinedSplitKeyPartsLink", [Unknown, V3_0];
    SplitKeyPolynomial = 0x42_01B6, "SplitKeyPolynomial", [Unknown, V3_0];
    DeactivationMessage = 0x42_01B7, "DeactivationMessage", [Unknown, V3_0];
    DeactivationReason = 0x42_01B8, "DeactivationReason", [Unknown, V3_0];
    DeactivationReasonCode = 0x42_01B9, "DeactivationReasonCode", [Unknown, V3_0];
    CertificateSubjectDn = 0x42_01BA, "CertificateSubjectDn", [Unknown, V3_0];
    CertificateIssuerDn = 0x42_01BB, "CertificateIssuerDn", [Unknown, V3_0];
    CertificateRequestLink = 0x42_01BC, "CertificateRequestLink", [Unknown, V3_0];
    CertifyCounter = 0x42_01BD, "CertifyCounter", [Unknown, V3_0];
    DecryptCounter = 0x42_01BE, "DecryptCounter", [Unknown, V3_0];
    EncryptCounter = 0x42_01BF, "EncryptCounter", [Unknown, V3_0];
    SignCounter = 0x42_01C0, "SignCounter", [Unknown, V3_0];
    SignatureVerifyCounter = 0x42_01C1, "SignatureVerifyCounter", [Unknown, V3_0];
    NistSecurityCategory = 0x42_01C2, "NistSecurityCategory", [Unknown, V3_0];
}
