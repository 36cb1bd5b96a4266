pub struct RegionCode {}

#[allow(unused)]
impl RegionCode {
    pub fn au() -> &'static str {
        "AU"
    }

    pub fn ca() -> &'static str {
        "CA"
    }

    pub fn de() -> &'static str {
        "DE"
    }

    pub fn gb() -> &'static str {
        "GB"
    }

    pub fn r#in() -> &'static str {
        "IN"
    }

    pub fn it() -> &'static str {
        "IT"
    }

    pub fn us() -> &'static str {
        "US"
    }

    pub fn un001() -> &'static str {
        "001"
    }

    pub fn zz() -> &'static str {
        "ZZ"
    }
}
