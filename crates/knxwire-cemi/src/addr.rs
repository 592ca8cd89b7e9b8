//! KNX device and group addresses.

/// Individual (physical) address of a KNX device, displayed as
/// `area.line.device`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndividualAddress(pub u16);

impl IndividualAddress {
    pub const fn new(area: u8, line: u8, device: u8) -> Self {
        Self(((area as u16 & 0x0F) << 12) | ((line as u16 & 0x0F) << 8) | device as u16)
    }

    pub const fn area(self) -> u8 {
        ((self.0 >> 12) & 0x0F) as u8
    }

    pub const fn line(self) -> u8 {
        ((self.0 >> 8) & 0x0F) as u8
    }

    pub const fn device(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl From<u16> for IndividualAddress {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<IndividualAddress> for u16 {
    fn from(addr: IndividualAddress) -> u16 {
        addr.0
    }
}

impl std::fmt::Display for IndividualAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.area(), self.line(), self.device())
    }
}

/// Group address in the three-level `main/middle/sub` scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupAddress(pub u16);

impl GroupAddress {
    pub const fn new(main: u8, middle: u8, sub: u8) -> Self {
        Self(((main as u16 & 0x1F) << 11) | ((middle as u16 & 0x07) << 8) | sub as u16)
    }

    pub const fn main(self) -> u8 {
        ((self.0 >> 11) & 0x1F) as u8
    }

    pub const fn middle(self) -> u8 {
        ((self.0 >> 8) & 0x07) as u8
    }

    pub const fn sub(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl From<u16> for GroupAddress {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<GroupAddress> for u16 {
    fn from(addr: GroupAddress) -> u16 {
        addr.0
    }
}

impl std::fmt::Display for GroupAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.main(), self.middle(), self.sub())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn individual_address_parts() {
        let addr = IndividualAddress::new(1, 1, 7);
        assert_eq!(addr.raw(), 0x1107);
        assert_eq!(addr.area(), 1);
        assert_eq!(addr.line(), 1);
        assert_eq!(addr.device(), 7);
        assert_eq!(addr.to_string(), "1.1.7");
    }

    #[test]
    fn individual_address_bounds() {
        let addr = IndividualAddress::new(15, 15, 255);
        assert_eq!(addr.raw(), 0xFFFF);
        assert_eq!(addr.to_string(), "15.15.255");
    }

    #[test]
    fn group_address_parts() {
        let addr = GroupAddress::new(1, 2, 3);
        assert_eq!(addr.raw(), 0x0A03);
        assert_eq!(addr.main(), 1);
        assert_eq!(addr.middle(), 2);
        assert_eq!(addr.sub(), 3);
        assert_eq!(addr.to_string(), "1/2/3");
    }

    #[test]
    fn group_address_bounds() {
        let addr = GroupAddress::new(31, 7, 255);
        assert_eq!(addr.raw(), 0xFFFF);
        assert_eq!(addr.to_string(), "31/7/255");
    }

    #[test]
    fn raw_roundtrip() {
        assert_eq!(u16::from(IndividualAddress::from(0x1203)), 0x1203);
        assert_eq!(u16::from(GroupAddress::from(0x0901)), 0x0901);
    }
}
