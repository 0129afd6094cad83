//! Known-answer vectors
//!
//! Hex-encoded big-endian integers. Keys use the public exponent 65537;
//! signatures were produced and checked with an independent RSA implementation.

/// 2048-bit modulus
pub const RSA2048_N: &str = concat!(
    "9d9fa67beae61a1abef0bc06dbfe4d65068f97c7a1e7cc5b62bf400765769a5b",
    "3ba469656cadd0d1d42063cb736de9d9b5fc113f5ff0ac3b1017f9cb380de259",
    "f44462f446e74f62d4f4bca936334d7ca3a866b673bafa7a9d31dce267325a53",
    "7e9686a4c8f80f0f5c11896d8e6aa8ff8e2b33fd1345feb76d73ddd7b3340b9e",
    "898d60944760e5e8c301d9c8fe4bd4bcab6519872a3572aab40f9b7d35b05149",
    "3292b12e94def655a78e026d4862c52e7980256b6b368341dc0c325ac8f84bfc",
    "14d93d4f47ea606ae141c2f5a53eda53ecc2576d628d488f4966966d818be224",
    "014afa3b86c0aad6ee3a702386254ddb7d703a93be21ff7e26cd98b56182f6c3",
);

/// Public exponent 65537
pub const PUBLIC_EXPONENT: &str = "010001";

/// 2048-bit private exponent
pub const RSA2048_D: &str = concat!(
    "50b68ad2d38306850197564110efd483d1eb3fa68b229e43817a3b784e1d8087",
    "0d307083ee35c7435b2346d6cc81d10899a6bcd23df788ca29c08d39e1b7425c",
    "1bb7d5100f2aad3d079d56ea3305ec3cd1b50efb88a18b57b41cef65c3c045fe",
    "9148d5239681677ccf016fe4f8d3673c8d795402d896b40b0b72147c3a988105",
    "da8bd50aa99d2fe6726ebdc15deae0d58f3691e010855dc18aff455c9ab1a321",
    "5dabdb5bbcf499afcd365aedf70f1ca75342cbef855908f3d8e5efcf893fdc5e",
    "bd91cb85a54fe82e5c90e2daafa16a9bc7731d41e56d4df3bcce582746d41883",
    "9971a00039046c4cebc0c90bde647cc4cd427e580814acc309f11de8982c2419",
);

/// SHA-256 signature of `"12345"`
pub const RSA2048_SHA256_SIG_12345: &str = concat!(
    "1973f0c88056d562cf457e11ac58007d52ae35cc466f31a9e74ea51d0f3da957",
    "d87fb314741b4166a6aae1d3e9a10356203d1d08ae939f3259acf639d87e67ab",
    "bdc12298ced3ee76d98e1effc87526941494fa59ad05cd3b284b88d622fd7b7b",
    "3ae99e55c50063df41223ba921041f7d8151383b3bb55356f5266244e400107f",
    "1dcd4df1f98ec5e6245b51cc1d8293da39381a80654163fb71bc228554af3c8a",
    "0322dd85823ac329afd6d17659d55a986080a6b030f58fb721917135ce28ee24",
    "0b661326283c7d0bc855d73dd859e053d538a772f9fd634600ad16fd3000c261",
    "e915c1f20d5ef8d75cfe7e1eb9ca1d98dafd82d2865a8f5be7837b2472bd9770",
);

/// Message whose signature begins with a zero byte
pub const LEADING_ZERO_MESSAGE: &[u8] = b"leading zero 220";

/// SHA-256 signature of [`LEADING_ZERO_MESSAGE`]
pub const RSA2048_SHA256_SIG_LEADING_ZERO: &str = concat!(
    "00c5e26885d718daa82c669cbb1ebcd1bbf8ab55708981fec8ccd517d605e0f6",
    "94ad4a1bac359081d3a02036b453513c2496631f7d31e3021174c238e23230e0",
    "135a771a2d6d3916491c80da52e119066f5c8a02b9997ed9c7fbbe723193786e",
    "de30bf30c6ea9d1c613e9aa59a3210e6b70be4aece6d88d529f88698434f5574",
    "a9e42bc226319036409e0addfcbb50c72b53be6a1b27d0aad3034b498aa7dfc7",
    "717cbb214d2154de7988aab6fc3f816cdf85646b17f6f6295b987ac1ea044250",
    "dc335c6038f03ed19ca4a9285a2371a05b44057633207daa863813b13e2b4b7a",
    "1d1cbbc6fbe695ccdd7ebb5a4a2c30b018f0dc7e887c3526f72d80e166f8ce82",
);

/// 480-bit modulus, too short for a SHA-256 encoding
pub const RSA480_N: &str = concat!(
    "db2e3e0adbb71a756eeed0f0ab8581e87b7007289797fda96cd51f7237d460e3",
    "dbabcb5fd2f2f56db970db34a4eaf0907ae671964904a24c0c902c67",
);

/// 480-bit private exponent
pub const RSA480_D: &str = concat!(
    "cc30ed6df2394836052e098b5d4fd8b1bc65a6d5a33cdefd7b3da5b923d64738",
    "1a1d201f21efec814540afee2b13cd232117cdc25782fd0aaaeb1b91",
);

/// 1024-bit modulus
pub const RSA1024_N: &str = concat!(
    "ddf166e8007e9edf64f76c168ca2e1f457f89faf4173ee535a4c21744edc0ef0",
    "7f0475c4a392182658b46c0165cff0e32e413de2c988d108748bb230d2ce1d14",
    "695de53f214251fa160496d1ac20d247a8bd2db872c9d841d5d438bfc1ef0dee",
    "b1a80e1f760cafbb7b00fcbfadacc0b5461f8c2045bcabc9f8907ca003a7f113",
);

/// 1024-bit private exponent
pub const RSA1024_D: &str = concat!(
    "0adfc805f7f83c3a7fcceb9bd33a2bcdf7fd737d77bc8161ce1bcacbd30d4f22",
    "1367198a0fe5998f4f6b4f9b65eca145d03f5c13df81f793ed79e6ba23a9fb9c",
    "ac0bba772bdda152f4a5266f2bb69f2337efe53d596ac3343d9e76fcb641637e",
    "668e91c7ceb7071a9cb5dd000cb5ef0dbc0263a5a274f46c815eeb9c8280a501",
);

/// SHA-256 signature of `"abc"`
pub const RSA1024_SHA256_SIG_ABC: &str = concat!(
    "db719ba414c6b4234e8d1869c8661ccff40c44890e553c0a761fec5444908fe3",
    "4bb748eadf4343f0110ae5544eedc5c106cc5f74d4f3beb3c005868dcd580441",
    "072aa78889faf1ff521ccd2b4da1512f794079d9dfa89f0f6510e1bac11beff4",
    "34510c516b7954e34381fd315a30d2a975c3b82f43458675de2494d1d85e6994",
);

/// SHA-384 signature of `"abc"`
pub const RSA1024_SHA384_SIG_ABC: &str = concat!(
    "30f0edb325e2cc61b921231131abc91ae0824819ec00c277218507b6bfa6c625",
    "64f2bb6df72bb10152e2dc5a852f6b01a79ff480eb06dccc3296f6d154dca5fc",
    "35f93a1cd34176230eb36117ea07b3ce8eee8ae320bdeffa4d9a88b58583153b",
    "ee189a5a8cf58c0c78af47ea51a089ad18541bdb4e3315787a4cb47cecf55bfc",
);

/// SHA-512 signature of `"abc"`
pub const RSA1024_SHA512_SIG_ABC: &str = concat!(
    "5b93ce8dc2f5a634796066e015319facebd57f091b56ffdcab675d7ea3477c35",
    "005e62a8cc6dc2cbf18e2a8a03fdcb1827aaa55f37aa6ab2a628d6694cd0f5e9",
    "4b4ca23ed95c45d8d4f05694439664906fefb7fce6b245abe23e71c376c52228",
    "4783400fef525c6be6a5d030e4cc1137a00adb6ba520e56550de251ac1657edc",
);
