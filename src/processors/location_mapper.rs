use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Raw premise strings mapped to canonical human-readable labels.
///
/// The two church keys really do map to two spellings ("WORHSIP" vs
/// "WORSHIP") in the reference table; kept as-is until the intended
/// canonical spelling is confirmed.
static LOCATION_SYNONYMS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("RESIDENCE/HOME", "RESIDENCE / HOME"),
        ("OTHERRESIDENCE(APARTMENT/CONDO)", "APARTMENT / CONDO"),
        ("NON-ATTACHEDRESDGARAGE/SHED/BULD", "GARAGE / SHED / OUTBUILDING"),
        ("ATTACHEDRESIDENTIALGARAGE", "GARAGE / SHED / OUTBUILDING"),
        ("PARKINGLOT/GARAGE", "PARKING LOT / GARAGE"),
        ("PARKING/DROPLOT/GARAGE", "PARKING LOT / GARAGE"),
        ("RESTAREA", "REST AREA"),
        ("\"SPECIALTYSTORE(TV,FUR,ETC)\"", "SPECIALTY STORE"),
        ("SPECIALTYSTORE", "SPECIALTY STORE"),
        ("SCHOOL-ELEMENTARY/SECONDARY", "SCHOOL"),
        ("SCHOOLCOLLEGE", "COLLEGE"),
        ("SCHOOL-COLLEGE/UNIVERSITY", "COLLEGE"),
        ("BANK/SAVINGSANDLOAN", "BANK"),
        ("OTHER/UNKOWN", "OTHER / UNKNOWN"),
        ("HOTEL/MOTEL/ETC.", "HOTEL / MOTEL"),
        ("CAMP/CAMPGROUND", "CAMPGROUND"),
        ("CEMETERY/GRAVEYARD", "CEMETERY"),
        ("FIELD/WOODS", "FIELD / WOODS"),
        ("SERVICE/GASSTATION", "GAS STATION"),
        ("CONVENIENCESTORE", "CONVENIENCE STORE"),
        ("BAR/NIGHTCLUB", "BAR / NIGHTCLUB"),
        ("DRUGSTORE/DOCTOR'SOFFICE/HOSPITAL", "DRUGSTORE / DR / HOSPITAL"),
        ("DRUGSTORE/DR`SOFFICE/HOSPITAL", "DRUGSTORE / DR / HOSPITAL"),
        ("HIGHWAY/ROAD/ALLEY/STREET/SIDEWALK", "ROAD / ALLEY / STREET"),
        ("HIGHWAY/ROAD/ALLEY", "ROAD / ALLEY / STREET"),
        ("RESTAURANT", "RESTAURANT"),
        ("AUTODEALERSHIP(NEWORUSED)", "AUTO DEALERSHIP"),
        ("AUTODEALERSHIPNEW/USED", "AUTO DEALERSHIP"),
        ("RENTALSTORAGEFACILITY", "STORAGE FACILITY"),
        ("RENTAL/STORAGEFACILITY", "STORAGE FACILITY"),
        ("SHOPPINGMALL", "MALL"),
        ("MALL/SHOPPINGCENTER", "MALL"),
        ("DAYCAREFACILITY", "DAYCARE FACILITY"),
        ("PARK/PLAYGROUND", "PARK / PLAYGROUND"),
        ("LIQUORSTORE", "LIQUOR STORE"),
        ("SHELTER-MISSION/HOMELESS", "HOMELESS SHELTER"),
        ("HOMELESSSHELTER/MISSION", "HOMELESS SHELTER"),
        ("CHURCH/SYNAGOGUE/TEMPLE/MOSQUE", "PLACE OF WORHSIP"),
        ("CHURCH/SYNAGOGUE/TEMPLE", "PLACE OF WORSHIP"),
        ("GROCERY/SUPERMARKET", "GROCERY STORE"),
        ("DOCK/WHARF/FREIGHT/MODALTERMINAL", "DOCK / WHARF / FREIGHT TERMINAL"),
        ("RACETRACK/GAMBLINGFACILITY", "RACETRACK / GAMBLING FACILITY"),
        ("GAMBLINGFACILITY/CASINO/RACETRACK", "RACETRACK / GAMBLING FACILITY"),
        ("FAIRGROUNDS/STADIUM/ARENA", "ARENA / STADIUM / FAIRGROUNDS"),
        ("ARENA/STADIUM/FAIRGROUNDS/COLISEUM", "ARENA / STADIUM / FAIRGROUNDS"),
        ("DEPARTMENT/DISCOUNTSTORE", "DEPARTMENT STORE"),
        ("COMMUNITYCENTER", "COMMUNITY STORE"),
        ("AIR/BUS/TRAINTERMINAL", "AIR / BUS / TRAIN TERMINAL"),
        ("ATMSEPARATEFROMBANK", "ATM"),
        ("AMUSEMENTPARK", "AMUSEMENT PARK"),
        ("ABANDONED/CONDEMNEDSTRUCTURE", "CONDEMNED STRUCTURE"),
        ("INDUSTRIALSITE", "INDUSTRIAL SITE"),
        ("GOVERNMENT/PUBLICBUILDING", "PUBLIC BUILDING"),
        ("COMMERCIAL/OFFICEBUILDING", "OFFICE BUILDING"),
    ])
});

/// Remaps raw premise strings to canonical location categories.
pub struct LocationMapper;

impl LocationMapper {
    pub fn new() -> Self {
        Self
    }

    /// Map a raw location category to its canonical label. Values not in
    /// the synonym table pass through unchanged.
    pub fn remap(&self, location_category: &str) -> String {
        LOCATION_SYNONYMS
            .get(location_category)
            .map(|canonical| canonical.to_string())
            .unwrap_or_else(|| location_category.to_string())
    }
}

impl Default for LocationMapper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_synonyms_remapped() {
        let mapper = LocationMapper::new();
        assert_eq!(mapper.remap("RESIDENCE/HOME"), "RESIDENCE / HOME");
        assert_eq!(mapper.remap("PARKINGLOT/GARAGE"), "PARKING LOT / GARAGE");
        assert_eq!(mapper.remap("SERVICE/GASSTATION"), "GAS STATION");
    }

    #[test]
    fn test_unmapped_values_pass_through() {
        let mapper = LocationMapper::new();
        assert_eq!(mapper.remap("VACANT LOT"), "VACANT LOT");
        assert_eq!(mapper.remap(""), "");
    }

    #[test]
    fn test_worship_spellings_preserved_as_found() {
        let mapper = LocationMapper::new();
        assert_eq!(
            mapper.remap("CHURCH/SYNAGOGUE/TEMPLE/MOSQUE"),
            "PLACE OF WORHSIP"
        );
        assert_eq!(mapper.remap("CHURCH/SYNAGOGUE/TEMPLE"), "PLACE OF WORSHIP");
    }

    #[test]
    fn test_duplicate_raw_variants_share_a_label() {
        let mapper = LocationMapper::new();
        assert_eq!(
            mapper.remap("RENTALSTORAGEFACILITY"),
            mapper.remap("RENTAL/STORAGEFACILITY")
        );
        assert_eq!(
            mapper.remap("SHOPPINGMALL"),
            mapper.remap("MALL/SHOPPINGCENTER")
        );
    }
}
