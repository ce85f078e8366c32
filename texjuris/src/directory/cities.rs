//! City police contact table.

use super::types::CityRecord;

struct CityRow {
    key: &'static str,
    name: &'static str,
    county: &'static str,
    police_phone: &'static str,
    police_website: &'static str,
    address: &'static str,
}

/// Major Texas cities with police contact information, keyed by lowercase name.
const TEXAS_CITIES: &[CityRow] = &[
    CityRow {
        key: "port arthur",
        name: "Port Arthur",
        county: "Jefferson County",
        police_phone: "(409) 983-8600",
        police_website: "https://www.portarthurtx.gov/departments/police",
        address: "645 4th St, Port Arthur, TX 77640",
    },
    CityRow {
        key: "houston",
        name: "Houston",
        county: "Harris County",
        police_phone: "(713) 884-3131",
        police_website: "https://www.houstontx.gov/police",
        address: "1200 Travis St, Houston, TX 77002",
    },
    CityRow {
        key: "san antonio",
        name: "San Antonio",
        county: "Bexar County",
        police_phone: "(210) 207-7273",
        police_website: "https://www.sanantonio.gov/SAPD",
        address: "315 S Santa Rosa Ave, San Antonio, TX 78207",
    },
    CityRow {
        key: "dallas",
        name: "Dallas",
        county: "Dallas County",
        police_phone: "(214) 671-4282",
        police_website: "https://www.dallaspolice.net",
        address: "1400 S Lamar St, Dallas, TX 75215",
    },
    CityRow {
        key: "austin",
        name: "Austin",
        county: "Travis County",
        police_phone: "(512) 974-5000",
        police_website: "https://www.austintexas.gov/department/police",
        address: "715 E 8th St, Austin, TX 78701",
    },
    CityRow {
        key: "fort worth",
        name: "Fort Worth",
        county: "Tarrant County",
        police_phone: "(817) 392-4222",
        police_website: "https://www.fortworthtexas.gov/departments/police",
        address: "350 W Belknap St, Fort Worth, TX 76102",
    },
    CityRow {
        key: "el paso",
        name: "El Paso",
        county: "El Paso County",
        police_phone: "(915) 212-4400",
        police_website: "https://www.elpasotexas.gov/police",
        address: "911 N Raynor St, El Paso, TX 79901",
    },
    CityRow {
        key: "arlington",
        name: "Arlington",
        county: "Tarrant County",
        police_phone: "(817) 459-5700",
        police_website: "https://www.arlingtontx.gov/city_hall/departments/police",
        address: "620 W Division St, Arlington, TX 76011",
    },
    CityRow {
        key: "corpus christi",
        name: "Corpus Christi",
        county: "Nueces County",
        police_phone: "(361) 886-2600",
        police_website: "https://www.cctexas.com/departments/police",
        address: "321 John Sartain St, Corpus Christi, TX 78401",
    },
    CityRow {
        key: "plano",
        name: "Plano",
        county: "Collin County",
        police_phone: "(972) 424-5678",
        police_website: "https://www.plano.gov/1183/Police",
        address: "909 14th St, Plano, TX 75074",
    },
    CityRow {
        key: "lubbock",
        name: "Lubbock",
        county: "Lubbock County",
        police_phone: "(806) 775-2865",
        police_website: "https://www.mylubbock.us/departments/police",
        address: "916 Texas Ave, Lubbock, TX 79401",
    },
    CityRow {
        key: "beaumont",
        name: "Beaumont",
        county: "Jefferson County",
        police_phone: "(409) 832-1234",
        police_website: "https://www.beaumonttexas.gov/departments/police",
        address: "255 College St, Beaumont, TX 77701",
    },
    CityRow {
        key: "orange",
        name: "Orange",
        county: "Orange County",
        police_phone: "(409) 883-1026",
        police_website: "https://www.orangetexas.net/police",
        address: "1212 W Park Ave, Orange, TX 77630",
    },
    CityRow {
        key: "nederland",
        name: "Nederland",
        county: "Jefferson County",
        police_phone: "(409) 722-4965",
        police_website: "https://www.ci.nederland.tx.us/departments/police",
        address: "1400 Boston Ave, Nederland, TX 77627",
    },
    CityRow {
        key: "groves",
        name: "Groves",
        county: "Jefferson County",
        police_phone: "(409) 962-0244",
        police_website: "https://www.grovescity.com/police",
        address: "6161 Madison Ave, Groves, TX 77619",
    },
    CityRow {
        key: "galveston",
        name: "Galveston",
        county: "Galveston County",
        police_phone: "(409) 765-3702",
        police_website: "https://www.galvestontx.gov/police",
        address: "823 Rosenberg Ave, Galveston, TX 77550",
    },
    CityRow {
        key: "tyler",
        name: "Tyler",
        county: "Smith County",
        police_phone: "(903) 531-1000",
        police_website: "https://www.cityoftyler.org/departments/police",
        address: "405 Martin Walker Dr, Tyler, TX 75702",
    },
    CityRow {
        key: "waco",
        name: "Waco",
        county: "McLennan County",
        police_phone: "(254) 750-7500",
        police_website: "https://www.waco-texas.com/departments/police",
        address: "3115 Pine Ave, Waco, TX 76708",
    },
    CityRow {
        key: "brownsville",
        name: "Brownsville",
        county: "Cameron County",
        police_phone: "(956) 548-7000",
        police_website: "https://www.cob.us/departments/police",
        address: "600 E Jackson St, Brownsville, TX 78520",
    },
    CityRow {
        key: "laredo",
        name: "Laredo",
        county: "Webb County",
        police_phone: "(956) 795-2800",
        police_website: "https://www.cityoflaredo.com/police",
        address: "4712 Maher Ave, Laredo, TX 78041",
    },
    CityRow {
        key: "college station",
        name: "College Station",
        county: "Brazos County",
        police_phone: "(979) 764-3600",
        police_website: "https://www.cstx.gov/departments/police",
        address: "1100 Krenek Tap Rd, College Station, TX 77840",
    },
    CityRow {
        key: "bryan",
        name: "Bryan",
        county: "Brazos County",
        police_phone: "(979) 209-5300",
        police_website: "https://www.bryantx.gov/departments/police",
        address: "303 E 29th St, Bryan, TX 77803",
    },
    CityRow {
        key: "vidor",
        name: "Vidor",
        county: "Orange County",
        police_phone: "(409) 769-4411",
        police_website: "https://www.vidortx.com/police",
        address: "1395 N Main St, Vidor, TX 77662",
    },
    CityRow {
        key: "bridge city",
        name: "Bridge City",
        county: "Orange County",
        police_phone: "(409) 735-4503",
        police_website: "https://www.bridgecitytx.com/police",
        address: "260 Raceway Dr, Bridge City, TX 77611",
    },
    CityRow {
        key: "west orange",
        name: "West Orange",
        county: "Orange County",
        police_phone: "(409) 883-4661",
        police_website: "https://www.westorangetx.com/police",
        address: "2700 Western Ave, West Orange, TX 77630",
    },
    CityRow {
        key: "pinehurst",
        name: "Pinehurst",
        county: "Orange County",
        police_phone: "(409) 886-4111",
        police_website: "https://www.pinehurstcity.com/police",
        address: "3730 Magnolia St, Pinehurst, TX 77362",
    },
];

/// Looks up a city record by name, case-insensitively.
pub fn city_by_name(name: &str) -> Option<CityRecord> {
    let key = name.trim().to_lowercase();
    TEXAS_CITIES
        .iter()
        .find(|row| row.key == key)
        .map(|row| CityRecord {
            name: row.name.to_string(),
            county: row.county.to_string(),
            police_phone: Some(row.police_phone.to_string()),
            police_website: Some(row.police_website.to_string()),
            address: Some(row.address.to_string()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_match_lowercased_names() {
        for row in TEXAS_CITIES {
            assert_eq!(row.key, row.name.to_lowercase());
        }
    }

    #[test]
    fn test_keys_are_unique() {
        for (i, row) in TEXAS_CITIES.iter().enumerate() {
            assert!(
                TEXAS_CITIES[i + 1..].iter().all(|r| r.key != row.key),
                "duplicate key {}",
                row.key
            );
        }
    }

    #[test]
    fn test_every_city_names_a_county() {
        for row in TEXAS_CITIES {
            assert!(row.county.ends_with("County"), "{}", row.county);
        }
    }

    #[test]
    fn test_multi_word_city_lookup() {
        let city = city_by_name("College Station").unwrap();
        assert_eq!(city.police_phone.as_deref(), Some("(979) 764-3600"));
    }
}
