// Build-time constants. Enquiries go to both addresses; the list is joined
// into the mailto recipient segment in the order given here.
pub const RECIPIENTS: [&str; 2] = ["office@axycad.co.uk", "darius@axycad.co.uk"];

pub const PHONE: &str = "+44 7403 831 178";
pub const LOCATION: &str = "Northamptonshire, United Kingdom";

pub const CROWDFUNDING_URL: &str =
    "https://www.justgiving.com/crowdfunding/togetherforanisia?utm_term=PN8gV4Bkx";
