//! Country, city and alias tables for the location resolver.

use crate::config::LocationTables;

pub const KNOWN_COUNTRIES: &[&str] = &[
    "Algeria",
    "Angola",
    "Benin",
    "Botswana",
    "Burkina Faso",
    "Burundi",
    "Cabo Verde",
    "Cameroon",
    "Central African Republic",
    "Chad",
    "Comoros",
    "Congo",
    "Democratic Republic of Congo",
    "Côte d'Ivoire",
    "Djibouti",
    "Egypt",
    "Equatorial Guinea",
    "Eritrea",
    "Eswatini",
    "Ethiopia",
    "Gabon",
    "Gambia",
    "Ghana",
    "Guinea",
    "Guinea-Bissau",
    "Kenya",
    "Lesotho",
    "Liberia",
    "Libya",
    "Madagascar",
    "Malawi",
    "Mali",
    "Mauritania",
    "Mauritius",
    "Morocco",
    "Mozambique",
    "Namibia",
    "Niger",
    "Nigeria",
    "Rwanda",
    "Sao Tome and Principe",
    "Senegal",
    "Seychelles",
    "Sierra Leone",
    "Somalia",
    "South Africa",
    "South Sudan",
    "Sudan",
    "Tanzania",
    "Togo",
    "Tunisia",
    "Uganda",
    "Zambia",
    "Zimbabwe",
    // Outside of Africa, commonly seen in the responses.
    "United States",
    "United Kingdom",
    "Canada",
    "Germany",
    "France",
    "Saudi Arabia",
    "United Arab Emirates",
    "Brazil",
    "Vietnam",
    "Hungary",
    "Belgium",
    "South Korea",
    "Turkey",
    "Türkiye",
];

/// Cities and regions, in lookup order for the substring pass.
pub const CITY_TO_COUNTRY: &[(&str, &str)] = &[
    ("lagos", "Nigeria"),
    ("abuja", "Nigeria"),
    ("ogun", "Nigeria"),
    ("ogun state", "Nigeria"),
    ("imo", "Nigeria"),
    ("imo state", "Nigeria"),
    ("nairobi", "Kenya"),
    ("nairobi metropolitan area", "Kenya"),
    ("mombasa", "Kenya"),
    ("kericho", "Kenya"),
    ("accra", "Ghana"),
    ("kumasi", "Ghana"),
    ("cape town", "South Africa"),
    ("johannesburg", "South Africa"),
    ("durban", "South Africa"),
    ("pretoria", "South Africa"),
    ("kigali", "Rwanda"),
    ("cairo", "Egypt"),
    ("alexandria", "Egypt"),
    ("addis ababa", "Ethiopia"),
    ("casablanca", "Morocco"),
    ("rabat", "Morocco"),
    ("kampala", "Uganda"),
    ("lusaka", "Zambia"),
    ("ndola", "Zambia"),
    ("harare", "Zimbabwe"),
    ("bulawayo", "Zimbabwe"),
    ("gaborone", "Botswana"),
    ("windhoek", "Namibia"),
    ("abidjan", "Côte d'Ivoire"),
    ("yamoussoukro", "Côte d'Ivoire"),
    ("kinshasa", "Democratic Republic of Congo"),
    ("lubumbashi", "Democratic Republic of Congo"),
    ("tunis", "Tunisia"),
    ("riyadh", "Saudi Arabia"),
    ("jeddah", "Saudi Arabia"),
    ("dubai", "United Arab Emirates"),
    ("abu dhabi", "United Arab Emirates"),
    ("victoria", "Seychelles"),
    ("antananarivo", "Madagascar"),
    ("porto-novo", "Benin"),
    ("porto novo", "Benin"),
    ("cotonou", "Benin"),
    ("bissau", "Guinea-Bissau"),
    ("bangui", "Central African Republic"),
    ("monrovia", "Liberia"),
    ("freetown", "Sierra Leone"),
    ("lilongwe", "Malawi"),
    ("blantyre", "Malawi"),
    ("dodoma", "Tanzania"),
    ("dar es salaam", "Tanzania"),
    ("yaounde", "Cameroon"),
    ("douala", "Cameroon"),
    ("nouakchott", "Mauritania"),
    ("mbabane", "Eswatini"),
    ("maseru", "Lesotho"),
    ("khartoum", "Sudan"),
    ("luanda", "Angola"),
    ("algiers", "Algeria"),
    ("dakar", "Senegal"),
    ("ouagadougou", "Burkina Faso"),
    ("bamako", "Mali"),
    ("n'djamena", "Chad"),
    ("banjul", "Gambia"),
    ("malabo", "Equatorial Guinea"),
    ("libreville", "Gabon"),
    ("port louis", "Mauritius"),
    ("moroni", "Comoros"),
];

/// Short forms, local names and frequent typos.
pub const COUNTRY_ALIASES: &[(&str, &str)] = &[
    ("cote divoire", "Côte d'Ivoire"),
    ("cote d ivoire", "Côte d'Ivoire"),
    ("cote d'ivoire", "Côte d'Ivoire"),
    ("ivory coast", "Côte d'Ivoire"),
    ("drc", "Democratic Republic of Congo"),
    ("dr congo", "Democratic Republic of Congo"),
    ("swaziland", "Eswatini"),
    ("uae", "United Arab Emirates"),
    ("uk", "United Kingdom"),
    ("usa", "United States"),
    ("us", "United States"),
    ("america", "United States"),
    ("britain", "United Kingdom"),
    ("england", "United Kingdom"),
    ("sa", "South Africa"),
    ("rsa", "South Africa"),
    ("ken", "Kenya"),
    ("keny", "Kenya"),
    ("kennya", "Kenya"),
    ("ghan", "Ghana"),
    ("egy", "Egypt"),
    ("ethi", "Ethiopia"),
    ("rwan", "Rwanda"),
    ("moro", "Morocco"),
    ("maroc", "Morocco"),
    ("marocco", "Morocco"),
    ("zimb", "Zimbabwe"),
    ("tanz", "Tanzania"),
    ("zamb", "Zambia"),
    ("camer", "Cameroon"),
    ("nig", "Nigeria"),
];

/// Answers that are known not to be a location at all.
pub const NON_COUNTRY_EXACT: &[&str] = &["tourism and hospitality", "country", "marketing"];

/// Fragments of contact information pasted into the location field.
pub const NON_COUNTRY_SUBSTRINGS: &[&str] = &[
    "gmail", "yahoo", "outlook", "hotmail", "mail", "gmailcom", "yahoocom", "email", "http",
    "https",
];

impl LocationTables {
    pub const STANDARD: LocationTables = LocationTables {
        known_countries: KNOWN_COUNTRIES,
        cities: CITY_TO_COUNTRY,
        aliases: COUNTRY_ALIASES,
        blacklist_exact: NON_COUNTRY_EXACT,
        blacklist_substrings: NON_COUNTRY_SUBSTRINGS,
        fuzzy_cutoff: 0.8,
    };
}
