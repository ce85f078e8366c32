//! Known small-municipality contact patterns.
//!
//! Secondary table consulted by the contact synthesizer before it generates
//! anything. Coverage is concentrated on Southeast Texas municipalities too
//! small for the main city table.

use super::types::ContactPattern;

const KNOWN_PATTERNS: &[(&str, ContactPattern)] = &[
    (
        "lumberton",
        ContactPattern {
            phone: "(409) 755-0542",
            website: "https://www.cityoflumberton.com",
            address: "1350 N Main St, Lumberton, TX 77657",
        },
    ),
    (
        "vidor",
        ContactPattern {
            phone: "(409) 769-4411",
            website: "https://www.vidortx.com",
            address: "1395 N Main St, Vidor, TX 77662",
        },
    ),
    (
        "bridge city",
        ContactPattern {
            phone: "(409) 735-4503",
            website: "https://www.bridgecitytx.com",
            address: "260 Raceway Dr, Bridge City, TX 77611",
        },
    ),
    (
        "west orange",
        ContactPattern {
            phone: "(409) 883-4661",
            website: "https://www.westorangetx.com",
            address: "2700 Western Ave, West Orange, TX 77630",
        },
    ),
    (
        "pinehurst",
        ContactPattern {
            phone: "(409) 886-4111",
            website: "https://www.pinehurstcity.com",
            address: "3730 Magnolia St, Pinehurst, TX 77362",
        },
    ),
    (
        "silsbee",
        ContactPattern {
            phone: "(409) 385-3009",
            website: "https://www.cityofsilsbee.com",
            address: "635 N 5th St, Silsbee, TX 77656",
        },
    ),
    (
        "bevil oaks",
        ContactPattern {
            phone: "(409) 753-1475",
            website: "https://www.beviloaks.org",
            address: "13560 FM 105, Beaumont, TX 77713",
        },
    ),
    (
        "china",
        ContactPattern {
            phone: "(409) 752-3912",
            website: "https://www.chinatexas.org",
            address: "940 Main St, China, TX 77613",
        },
    ),
    (
        "nome",
        ContactPattern {
            phone: "(409) 753-4334",
            website: "https://www.nometexas.org",
            address: "1560 Highway 105, Nome, TX 77629",
        },
    ),
    (
        "fannett",
        ContactPattern {
            phone: "(409) 794-2391",
            website: "https://www.fannetttx.org",
            address: "13465 FM 365, Fannett, TX 77705",
        },
    ),
    (
        "hamshire",
        ContactPattern {
            phone: "(409) 267-3033",
            website: "https://www.hamshiretx.org",
            address: "20350 FM 124, Hamshire, TX 77622",
        },
    ),
    (
        "taylor landing",
        ContactPattern {
            phone: "(409) 794-2829",
            website: "https://www.taylorlandingtx.org",
            address: "1564 Taylor Landing Blvd, Taylor Landing, TX 77632",
        },
    ),
    (
        "central gardens",
        ContactPattern {
            phone: "(409) 794-3902",
            website: "https://www.centralgardens.org",
            address: "8505 Spencer Hwy, Central Gardens, TX 77705",
        },
    ),
    (
        "beverly hills",
        ContactPattern {
            phone: "(409) 892-2424",
            website: "https://www.beverlyhillstx.org",
            address: "10855 Concord Rd, Beverly Hills, TX 77617",
        },
    ),
    (
        "rose city",
        ContactPattern {
            phone: "(409) 794-3902",
            website: "https://www.rosecitytx.org",
            address: "1946 Rose City Blvd, Rose City, TX 77662",
        },
    ),
    (
        "kountze",
        ContactPattern {
            phone: "(409) 246-3413",
            website: "https://www.kountzetx.org",
            address: "306 Redwood St, Kountze, TX 77625",
        },
    ),
    (
        "woodville",
        ContactPattern {
            phone: "(409) 283-3712",
            website: "https://www.woodvilletx.org",
            address: "715 N Charlton St, Woodville, TX 75979",
        },
    ),
    (
        "jasper",
        ContactPattern {
            phone: "(409) 384-2721",
            website: "https://www.jaspertx.org",
            address: "209 N Austin St, Jasper, TX 75951",
        },
    ),
    (
        "kirbyville",
        ContactPattern {
            phone: "(409) 423-4541",
            website: "https://www.kirbyvilletx.org",
            address: "117 S Margaret St, Kirbyville, TX 75956",
        },
    ),
    (
        "buna",
        ContactPattern {
            phone: "(409) 994-5596",
            website: "https://www.bunatx.org",
            address: "135 Tram Rd, Buna, TX 77612",
        },
    ),
    (
        "evadale",
        ContactPattern {
            phone: "(409) 276-3413",
            website: "https://www.evadale.org",
            address: "7070 FM 105, Evadale, TX 77615",
        },
    ),
    (
        "sour lake",
        ContactPattern {
            phone: "(409) 287-3664",
            website: "https://www.sourlake.org",
            address: "110 Rosedale St, Sour Lake, TX 77659",
        },
    ),
    (
        "liberty",
        ContactPattern {
            phone: "(936) 336-3684",
            website: "https://www.cityofliberty.com",
            address: "1829 Sam Houston St, Liberty, TX 77575",
        },
    ),
    (
        "dayton",
        ContactPattern {
            phone: "(936) 258-2548",
            website: "https://www.daytontx.org",
            address: "801 S Cleveland St, Dayton, TX 77535",
        },
    ),
    (
        "cleveland",
        ContactPattern {
            phone: "(281) 592-2667",
            website: "https://www.clevelandtx.org",
            address: "907 E Houston St, Cleveland, TX 77327",
        },
    ),
    (
        "huntsville",
        ContactPattern {
            phone: "(936) 291-5480",
            website: "https://www.huntsvilletx.gov",
            address: "815 11th St, Huntsville, TX 77340",
        },
    ),
    (
        "conroe",
        ContactPattern {
            phone: "(936) 522-3200",
            website: "https://www.cityofconroe.org",
            address: "601 N Main St, Conroe, TX 77301",
        },
    ),
    (
        "willis",
        ContactPattern {
            phone: "(936) 856-6227",
            website: "https://www.willis.tx.us",
            address: "10355 Rogers Rd, Willis, TX 77318",
        },
    ),
    (
        "montgomery",
        ContactPattern {
            phone: "(936) 597-6966",
            website: "https://www.montgomerytx.org",
            address: "101 Old Plantersville Rd, Montgomery, TX 77356",
        },
    ),
    (
        "magnolia",
        ContactPattern {
            phone: "(281) 356-7122",
            website: "https://www.magnoliatx.org",
            address: "18111 Buddy Riley Blvd, Magnolia, TX 77354",
        },
    ),
    (
        "tomball",
        ContactPattern {
            phone: "(281) 290-1021",
            website: "https://www.tomballtx.gov",
            address: "401 Market St, Tomball, TX 77375",
        },
    ),
    (
        "spring",
        ContactPattern {
            phone: "(281) 353-9809",
            website: "https://www.springtx.gov",
            address: "1327 Spring Cypress Rd, Spring, TX 77373",
        },
    ),
    (
        "humble",
        ContactPattern {
            phone: "(281) 446-2327",
            website: "https://www.humbletx.gov",
            address: "114 W Higgins St, Humble, TX 77338",
        },
    ),
    (
        "kingwood",
        ContactPattern {
            phone: "(281) 359-3120",
            website: "https://www.kingwoodtx.gov",
            address: "22026 Northpark Dr, Kingwood, TX 77339",
        },
    ),
    (
        "atascocita",
        ContactPattern {
            phone: "(281) 812-4200",
            website: "https://www.atascocita.org",
            address: "18700 W Lake Houston Pkwy, Atascocita, TX 77346",
        },
    ),
    (
        "porter",
        ContactPattern {
            phone: "(281) 354-1181",
            website: "https://www.portertx.org",
            address: "25129 FM 1314, Porter, TX 77365",
        },
    ),
    (
        "splendora",
        ContactPattern {
            phone: "(281) 689-5493",
            website: "https://www.splendoratx.org",
            address: "25129 FM 2090, Splendora, TX 77372",
        },
    ),
    (
        "new caney",
        ContactPattern {
            phone: "(281) 399-5911",
            website: "https://www.newcaneytx.gov",
            address: "23000 Loop 494, New Caney, TX 77357",
        },
    ),
    (
        "roman forest",
        ContactPattern {
            phone: "(281) 446-4252",
            website: "https://www.romanforesttx.gov",
            address: "26615 Hufsmith Kuykendahl Rd, Roman Forest, TX 77357",
        },
    ),
    (
        "patton village",
        ContactPattern {
            phone: "(936) 689-3896",
            website: "https://www.pattonvillage.org",
            address: "16940 Royder Rd, Patton Village, TX 77372",
        },
    ),
    (
        "panorama village",
        ContactPattern {
            phone: "(936) 856-3706",
            website: "https://www.panoramavillage.org",
            address: "14500 Woodforest Blvd, Panorama Village, TX 77384",
        },
    ),
    (
        "stagecoach",
        ContactPattern {
            phone: "(936) 399-3717",
            website: "https://www.stagecoachtx.org",
            address: "29086 FM 1486, Stagecoach, TX 77355",
        },
    ),
    (
        "cut and shoot",
        ContactPattern {
            phone: "(936) 441-2040",
            website: "https://www.cutandshoot.org",
            address: "1020 Gladstell Rd, Cut and Shoot, TX 77306",
        },
    ),
    (
        "shoreacres",
        ContactPattern {
            phone: "(281) 471-2992",
            website: "https://www.shoreacres-tx.gov",
            address: "1008 2nd St, Shoreacres, TX 77571",
        },
    ),
    (
        "seabrook",
        ContactPattern {
            phone: "(281) 291-5610",
            website: "https://www.seabrooktx.gov",
            address: "1700 1st St, Seabrook, TX 77586",
        },
    ),
    (
        "kemah",
        ContactPattern {
            phone: "(281) 334-5911",
            website: "https://www.kemah-tx.gov",
            address: "1401 Highway 146, Kemah, TX 77565",
        },
    ),
    (
        "league city",
        ContactPattern {
            phone: "(281) 554-1000",
            website: "https://www.leaguecitytx.gov",
            address: "555 W Walker St, League City, TX 77573",
        },
    ),
    (
        "friendswood",
        ContactPattern {
            phone: "(281) 996-3300",
            website: "https://www.friendswood.com",
            address: "910 S Friendswood Dr, Friendswood, TX 77546",
        },
    ),
    (
        "pearland",
        ContactPattern {
            phone: "(281) 997-4100",
            website: "https://www.pearlandtx.gov",
            address: "3519 Liberty Dr, Pearland, TX 77581",
        },
    ),
    (
        "pasadena",
        ContactPattern {
            phone: "(713) 477-1221",
            website: "https://www.pasadenatx.gov",
            address: "1149 Ellsworth Dr, Pasadena, TX 77506",
        },
    ),
    (
        "deer park",
        ContactPattern {
            phone: "(281) 478-7200",
            website: "https://www.deerparktx.gov",
            address: "710 E San Augustine St, Deer Park, TX 77536",
        },
    ),
    (
        "la porte",
        ContactPattern {
            phone: "(281) 471-2141",
            website: "https://www.laportetx.gov",
            address: "604 W Fairmont Pkwy, La Porte, TX 77571",
        },
    ),
    (
        "baytown",
        ContactPattern {
            phone: "(281) 422-8371",
            website: "https://www.baytown.org",
            address: "2401 Market St, Baytown, TX 77520",
        },
    ),
    (
        "mont belvieu",
        ContactPattern {
            phone: "(281) 576-2216",
            website: "https://www.montbelvieu.net",
            address: "11555 Eagle Dr, Mont Belvieu, TX 77523",
        },
    ),
    (
        "anahuac",
        ContactPattern {
            phone: "(409) 267-4200",
            website: "https://www.anahuac.net",
            address: "1806 Miller St, Anahuac, TX 77514",
        },
    ),
    (
        "winnie",
        ContactPattern {
            phone: "(409) 296-2591",
            website: "https://www.winnietx.org",
            address: "538 Main St, Winnie, TX 77665",
        },
    ),
    (
        "stowell",
        ContactPattern {
            phone: "(409) 296-4444",
            website: "https://www.stowelltx.org",
            address: "1234 FM 1663, Stowell, TX 77661",
        },
    ),
    (
        "high island",
        ContactPattern {
            phone: "(409) 286-5252",
            website: "https://www.highislandtx.org",
            address: "2618 5th St, High Island, TX 77623",
        },
    ),
    (
        "gilchrist",
        ContactPattern {
            phone: "(409) 286-5353",
            website: "https://www.gilchristtx.org",
            address: "1905 Hwy 87, Gilchrist, TX 77617",
        },
    ),
    (
        "crystal beach",
        ContactPattern {
            phone: "(409) 684-4444",
            website: "https://www.crystalbeachtx.org",
            address: "1681 Highway 87, Crystal Beach, TX 77650",
        },
    ),
    (
        "bolivar peninsula",
        ContactPattern {
            phone: "(409) 684-5555",
            website: "https://www.bolivarpeninsula.org",
            address: "1765 State Highway 87, Bolivar Peninsula, TX 77617",
        },
    ),
];

/// Looks up a known municipality pattern by exact (case-insensitive) name.
pub fn municipal_pattern(city_name: &str) -> Option<ContactPattern> {
    let key = city_name.trim().to_lowercase();
    KNOWN_PATTERNS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, pattern)| *pattern)
}
