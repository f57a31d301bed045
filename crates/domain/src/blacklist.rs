//! Known forged-answer addresses.
//!
//! On-path censoring injectors answer poisoned queries from a small, stable
//! pool of bogus IPv4 addresses. An answer matching this set is a forgery
//! regardless of which domain was asked for.

use std::collections::HashSet;
use std::net::Ipv4Addr;

/// Addresses observed in injected answers. Pre-seeded, process lifetime.
pub const KNOWN_FORGED_ADDRS: [Ipv4Addr; 38] = [
    Ipv4Addr::new(74, 125, 127, 102),
    Ipv4Addr::new(74, 125, 155, 102),
    Ipv4Addr::new(74, 125, 39, 102),
    Ipv4Addr::new(74, 125, 39, 113),
    Ipv4Addr::new(209, 85, 229, 138),
    Ipv4Addr::new(128, 121, 126, 139),
    Ipv4Addr::new(159, 106, 121, 75),
    Ipv4Addr::new(169, 132, 13, 103),
    Ipv4Addr::new(192, 67, 198, 6),
    Ipv4Addr::new(202, 106, 1, 2),
    Ipv4Addr::new(202, 181, 7, 85),
    Ipv4Addr::new(203, 161, 230, 171),
    Ipv4Addr::new(203, 98, 7, 65),
    Ipv4Addr::new(207, 12, 88, 98),
    Ipv4Addr::new(208, 56, 31, 43),
    Ipv4Addr::new(209, 145, 54, 50),
    Ipv4Addr::new(209, 220, 30, 174),
    Ipv4Addr::new(209, 36, 73, 33),
    Ipv4Addr::new(211, 94, 66, 147),
    Ipv4Addr::new(213, 169, 251, 35),
    Ipv4Addr::new(216, 221, 188, 182),
    Ipv4Addr::new(216, 234, 179, 13),
    Ipv4Addr::new(243, 185, 187, 39),
    Ipv4Addr::new(37, 61, 54, 158),
    Ipv4Addr::new(4, 36, 66, 178),
    Ipv4Addr::new(46, 82, 174, 68),
    Ipv4Addr::new(59, 24, 3, 173),
    Ipv4Addr::new(64, 33, 88, 161),
    Ipv4Addr::new(64, 33, 99, 47),
    Ipv4Addr::new(64, 66, 163, 251),
    Ipv4Addr::new(65, 104, 202, 252),
    Ipv4Addr::new(65, 160, 219, 113),
    Ipv4Addr::new(66, 45, 252, 237),
    Ipv4Addr::new(72, 14, 205, 104),
    Ipv4Addr::new(72, 14, 205, 99),
    Ipv4Addr::new(78, 16, 49, 15),
    Ipv4Addr::new(8, 7, 198, 45),
    Ipv4Addr::new(93, 46, 8, 89),
];

/// Read-only membership check over the forged-answer set.
#[derive(Debug, Clone)]
pub struct ForgedAnswerFilter {
    addrs: HashSet<Ipv4Addr>,
}

impl ForgedAnswerFilter {
    /// Filter over the embedded dataset.
    pub fn builtin() -> Self {
        Self::from_addrs(KNOWN_FORGED_ADDRS)
    }

    pub fn from_addrs(addrs: impl IntoIterator<Item = Ipv4Addr>) -> Self {
        Self {
            addrs: addrs.into_iter().collect(),
        }
    }

    pub fn is_forged(&self, addr: Ipv4Addr) -> bool {
        self.addrs.contains(&addr)
    }

    pub fn len(&self) -> usize {
        self.addrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addrs.is_empty()
    }
}
