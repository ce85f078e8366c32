//! County sheriff contact table.

use super::types::CountyRecord;

struct CountyRow {
    slug: &'static str,
    name: &'static str,
    sheriff_phone: &'static str,
    sheriff_website: &'static str,
    address: &'static str,
}

/// Texas counties with sheriff contact information, keyed by county slug.
const TEXAS_COUNTIES: &[CountyRow] = &[
    CountyRow {
        slug: "jefferson",
        name: "Jefferson County",
        sheriff_phone: "(409) 835-8411",
        sheriff_website: "https://www.co.jefferson.tx.us/sheriff",
        address: "1001 Pearl St, Beaumont, TX 77701",
    },
    CountyRow {
        slug: "harris",
        name: "Harris County",
        sheriff_phone: "(713) 755-7628",
        sheriff_website: "https://www.hcso.org",
        address: "1200 Baker St, Houston, TX 77002",
    },
    CountyRow {
        slug: "dallas",
        name: "Dallas County",
        sheriff_phone: "(214) 749-8641",
        sheriff_website: "https://www.dallascounty.org/departments/sheriff",
        address: "133 N Industrial Blvd, Dallas, TX 75207",
    },
    CountyRow {
        slug: "tarrant",
        name: "Tarrant County",
        sheriff_phone: "(817) 884-1213",
        sheriff_website: "https://www.tarrantcounty.com/en/sheriff",
        address: "200 Taylor St, Fort Worth, TX 76196",
    },
    CountyRow {
        slug: "bexar",
        name: "Bexar County",
        sheriff_phone: "(210) 335-6000",
        sheriff_website: "https://www.bexar.org/1250/Sheriffs-Office",
        address: "200 N Comal St, San Antonio, TX 78207",
    },
    CountyRow {
        slug: "travis",
        name: "Travis County",
        sheriff_phone: "(512) 854-9770",
        sheriff_website: "https://www.tcso.org",
        address: "5555 Airport Blvd, Austin, TX 78751",
    },
    CountyRow {
        slug: "collin",
        name: "Collin County",
        sheriff_phone: "(972) 547-5100",
        sheriff_website: "https://www.collincountytx.gov/sheriff",
        address: "4300 Community Ave, McKinney, TX 75071",
    },
    CountyRow {
        slug: "denton",
        name: "Denton County",
        sheriff_phone: "(940) 349-1600",
        sheriff_website: "https://www.dentoncounty.gov/Departments/Sheriff",
        address: "127 N Woodrow Ln, Denton, TX 76205",
    },
    CountyRow {
        slug: "fort_bend",
        name: "Fort Bend County",
        sheriff_phone: "(281) 341-4665",
        sheriff_website: "https://www.fbcso.org",
        address: "1410 Ransom Rd, Richmond, TX 77469",
    },
    CountyRow {
        slug: "williamson",
        name: "Williamson County",
        sheriff_phone: "(512) 943-1300",
        sheriff_website: "https://www.wilco.org/Departments/Sheriff",
        address: "508 S Rock St, Georgetown, TX 78626",
    },
    CountyRow {
        slug: "hidalgo",
        name: "Hidalgo County",
        sheriff_phone: "(956) 383-8114",
        sheriff_website: "https://www.hidalgocounty.us/269/Sheriffs-Office",
        address: "100 N Closner Blvd, Edinburg, TX 78539",
    },
    CountyRow {
        slug: "el_paso",
        name: "El Paso County",
        sheriff_phone: "(915) 538-2008",
        sheriff_website: "https://www.epcounty.com/sheriff",
        address: "3850 E Paisano Dr, El Paso, TX 79905",
    },
    CountyRow {
        slug: "nueces",
        name: "Nueces County",
        sheriff_phone: "(361) 887-2222",
        sheriff_website: "https://www.nuecesco.com/sheriff",
        address: "901 Leopard St, Corpus Christi, TX 78401",
    },
    CountyRow {
        slug: "lubbock",
        name: "Lubbock County",
        sheriff_phone: "(806) 775-1400",
        sheriff_website: "https://www.lubbockcounty.gov/departments/sheriff",
        address: "916 Main St, Lubbock, TX 79401",
    },
    CountyRow {
        slug: "galveston",
        name: "Galveston County",
        sheriff_phone: "(409) 766-2322",
        sheriff_website: "https://www.galvestoncountysheriff.org",
        address: "5600 39th St, Dickinson, TX 77539",
    },
    CountyRow {
        slug: "montgomery",
        name: "Montgomery County",
        sheriff_phone: "(936) 760-5800",
        sheriff_website: "https://www.mctxsheriff.org",
        address: "100 Community Center Dr, Conroe, TX 77301",
    },
    CountyRow {
        slug: "brazoria",
        name: "Brazoria County",
        sheriff_phone: "(979) 864-2392",
        sheriff_website: "https://www.brazoriacountysheriff.org",
        address: "111 E Locust St, Angleton, TX 77515",
    },
    CountyRow {
        slug: "bell",
        name: "Bell County",
        sheriff_phone: "(254) 933-5412",
        sheriff_website: "https://www.bellcountytx.com/departments/sheriff",
        address: "1201 Huey Bratcher Rd, Belton, TX 76513",
    },
    CountyRow {
        slug: "mclennan",
        name: "McLennan County",
        sheriff_phone: "(254) 757-5049",
        sheriff_website: "https://www.mclennancountytx.gov/departments/sheriff",
        address: "3121 E Loop 340, Waco, TX 76705",
    },
    CountyRow {
        slug: "cameron",
        name: "Cameron County",
        sheriff_phone: "(956) 554-6700",
        sheriff_website: "https://www.cameroncountysheriff.org",
        address: "7300 Old Alice Rd, Olmito, TX 78575",
    },
    CountyRow {
        slug: "webb",
        name: "Webb County",
        sheriff_phone: "(956) 415-2878",
        sheriff_website: "https://www.webbcountytx.gov/sheriff",
        address: "1110 Victoria St, Laredo, TX 78040",
    },
    CountyRow {
        slug: "orange",
        name: "Orange County",
        sheriff_phone: "(409) 883-2612",
        sheriff_website: "https://www.orangecountytx.gov/departments/sheriff",
        address: "123 6th St, Orange, TX 77630",
    },
    CountyRow {
        slug: "smith",
        name: "Smith County",
        sheriff_phone: "(903) 566-6600",
        sheriff_website: "https://www.smith-county.com/sheriff",
        address: "227 N Spring Ave, Tyler, TX 75702",
    },
    CountyRow {
        slug: "brazos",
        name: "Brazos County",
        sheriff_phone: "(979) 361-4900",
        sheriff_website: "https://www.brazoscountytx.gov/sheriff",
        address: "1755 Briarcrest Dr, Bryan, TX 77802",
    },
];

/// Derives the lookup slug for a county name.
///
/// Lowercase, `" county"` suffix stripped, remaining spaces replaced with
/// underscores: `"Fort Bend County"` -> `"fort_bend"`.
pub fn county_slug(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .trim_end_matches(" county")
        .replace(' ', "_")
}

/// Looks up a county record by slug.
pub fn county_by_slug(slug: &str) -> Option<CountyRecord> {
    TEXAS_COUNTIES
        .iter()
        .find(|row| row.slug == slug)
        .map(|row| CountyRecord {
            name: row.name.to_string(),
            sheriff_phone: Some(row.sheriff_phone.to_string()),
            sheriff_website: Some(row.sheriff_website.to_string()),
            address: Some(row.address.to_string()),
        })
}

/// Statewide fallback when no county boundary matches: the Texas
/// Department of Public Safety.
pub fn statewide_fallback() -> CountyRecord {
    CountyRecord {
        name: "Texas".to_string(),
        sheriff_phone: Some("(512) 463-2000".to_string()),
        sheriff_website: Some("https://www.dps.texas.gov".to_string()),
        address: None,
    }
}
