//! Curated root classes per category for the offline closure build.
//!
//! Order matters: when two roots share descendants, the root listed first
//! claims them. Geography and People come before the broader cultural roots
//! so that places and persons are not swallowed by "organization"-like
//! ancestors further down the list.

use crate::models::Category;

/// A root class whose subclass-of closure is claimed for one category.
#[derive(Debug, Clone, Copy)]
pub struct RootClass {
    pub id: &'static str,
    pub category: Category,
    pub label: &'static str,
    /// Maximum descendants requested for this root.
    pub limit: u32,
}

const fn root(id: &'static str, category: Category, label: &'static str, limit: u32) -> RootClass {
    RootClass {
        id,
        category,
        label,
        limit,
    }
}

pub const ROOT_CLASSES: &[RootClass] = &[
    // Geography
    root("Q486972", Category::Geography, "human settlement", 8000),
    root("Q56061", Category::Geography, "administrative territorial entity", 8000),
    root("Q15642541", Category::Geography, "human-geographic territorial entity", 5000),
    root("Q82794", Category::Geography, "geographic region", 5000),
    root("Q35145263", Category::Geography, "natural geographic object", 3000),
    root("Q46831", Category::Geography, "mountain range", 1000),
    root("Q23442", Category::Geography, "island", 2000),
    root("Q165", Category::Geography, "sea", 500),
    root("Q4022", Category::Geography, "river", 2000),
    root("Q8502", Category::Geography, "mountain", 2000),
    root("Q23397", Category::Geography, "lake", 1500),
    root("Q39816", Category::Geography, "valley", 1000),
    root("Q185113", Category::Geography, "plateau", 500),
    root("Q34763", Category::Geography, "peninsula", 500),
    root("Q54050", Category::Geography, "hill", 1000),
    root("Q355304", Category::Geography, "watercourse", 1500),
    root("Q15324", Category::Geography, "body of water", 2000),
    root("Q6256", Category::Geography, "country", 1000),
    root("Q3624078", Category::Geography, "sovereign state", 500),
    root("Q107390", Category::Geography, "federated state", 1000),
    root("Q1093829", Category::Geography, "city-state", 200),
    root("Q93352", Category::Geography, "coast", 500),
    // People
    root("Q5", Category::People, "human", 5000),
    root("Q215627", Category::People, "person", 3000),
    root("Q36180", Category::People, "writer", 2000),
    root("Q82955", Category::People, "politician", 2000),
    root("Q901", Category::People, "scientist", 2000),
    root("Q483501", Category::People, "artist", 2000),
    root("Q33999", Category::People, "actor", 1500),
    root("Q639669", Category::People, "musician", 1500),
    root("Q177220", Category::People, "singer", 1500),
    root("Q2066131", Category::People, "athlete", 2000),
    root("Q2259451", Category::People, "cleric", 1000),
    root("Q42603", Category::People, "priest", 1000),
    root("Q43845", Category::People, "businessperson", 1000),
    root("Q47064", Category::People, "military personnel", 1500),
    root("Q1028181", Category::People, "painter", 1000),
    root("Q15632617", Category::People, "fictional human", 1000),
    root("Q4271324", Category::People, "mythical character", 1000),
    root("Q189290", Category::People, "military officer", 1500),
    root("Q333634", Category::People, "translator", 500),
    root("Q170790", Category::People, "mathematician", 1000),
    root("Q39631", Category::People, "physician", 1000),
    root("Q185351", Category::People, "jurist", 1000),
    root("Q1622272", Category::People, "university teacher", 1000),
    root("Q10800557", Category::People, "film actor", 1000),
    root("Q4964182", Category::People, "philosopher", 1000),
    root("Q81096", Category::People, "engineer", 1000),
    root("Q13382576", Category::People, "nobility", 1500),
    root("Q2478141", Category::People, "aristocrat", 1000),
    root("Q22808320", Category::People, "monarch", 1000),
    root("Q116", Category::People, "monarch (position)", 500),
    // Religion
    root("Q9174", Category::Religion, "religion", 8000),
    root("Q1530022", Category::Religion, "religious organization", 3000),
    root("Q24398318", Category::Religion, "religious building", 3000),
    root("Q1841533", Category::Religion, "religious text", 1000),
    root("Q3220391", Category::Religion, "religious concept", 1000),
    root("Q1068640", Category::Religion, "deity", 1000),
    root("Q16970", Category::Religion, "church building", 2000),
    root("Q120560", Category::Religion, "basilica", 500),
    root("Q44539", Category::Religion, "temple", 1500),
    root("Q15877", Category::Religion, "abbey", 500),
    root("Q160742", Category::Religion, "monastery", 1000),
    root("Q9238344", Category::Religion, "religious movement", 1000),
    root("Q12131", Category::Religion, "religious denomination", 1500),
    root("Q1185588", Category::Religion, "religious doctrine", 1000),
    root("Q1244922", Category::Religion, "religious order", 1000),
    root("Q179723", Category::Religion, "canonization", 200),
    root("Q185085", Category::Religion, "feast day", 500),
    root("Q150093", Category::Religion, "crypt", 200),
    root("Q47280", Category::Religion, "pilgrimage", 300),
    root("Q14756018", Category::Religion, "religious festival", 500),
    root("Q1539016", Category::Religion, "religious profession", 1000),
    root("Q1643657", Category::Religion, "religious concept", 1000),
    root("Q1128969", Category::Religion, "religious sacrament", 300),
    root("Q232932", Category::Religion, "heresy", 500),
    root("Q1414816", Category::Religion, "religious syncretism", 200),
    root("Q2915731", Category::Religion, "religious service", 500),
    root("Q3469507", Category::Religion, "Christian denomination", 1500),
    root("Q7755", Category::Religion, "schism", 300),
    root("Q1047607", Category::Religion, "relic", 300),
    root("Q34651", Category::Religion, "patriarch", 500),
    root("Q41710", Category::Religion, "ethnic religion", 500),
    root("Q3502482", Category::Religion, "religious community", 1000),
    root("Q23847174", Category::Religion, "prayer", 500),
    root("Q33104279", Category::Religion, "religious practice", 500),
    root("Q2142152", Category::Religion, "sacred site", 500),
    // History
    root("Q13418847", Category::History, "historical event", 2000),
    root("Q11514315", Category::History, "historical period", 1500),
    root("Q48349", Category::History, "empire", 500),
    root("Q198", Category::History, "war", 2000),
    root("Q178561", Category::History, "battle", 2000),
    root("Q8016240", Category::History, "historical country", 2000),
    root("Q164950", Category::History, "revolution", 500),
    root("Q3024240", Category::History, "historical administrative territorial entity", 1500),
    root("Q159821", Category::History, "rebellion", 500),
    root("Q180684", Category::History, "conflict", 1500),
    root("Q124757", Category::History, "coup d'état", 300),
    root("Q8486", Category::History, "coronation", 200),
    root("Q12323", Category::History, "annexation", 200),
    root("Q625994", Category::History, "peace treaty", 500),
    root("Q131569", Category::History, "treaty", 1000),
    root("Q8473", Category::History, "military operation", 1000),
    root("Q216380", Category::History, "crusade", 200),
    root("Q192909", Category::History, "chronicle", 500),
    root("Q625298", Category::History, "historical document", 500),
    root("Q3055118", Category::History, "historical organization", 1000),
    root("Q36279", Category::History, "dynasty", 500),
    root("Q417175", Category::History, "succession", 300),
    root("Q5633421", Category::History, "historical event", 1500),
    root("Q1366112", Category::History, "patriciate", 300),
    root("Q839954", Category::History, "archaeological site", 1500),
    root("Q10864048", Category::History, "ancient history", 500),
    root("Q11768", Category::History, "plague", 300),
    root("Q2596997", Category::History, "historical occupation", 1000),
    root("Q1480166", Category::History, "historical science", 500),
    root("Q751876", Category::History, "siege", 500),
    root("Q1004996", Category::History, "historical title", 500),
    root("Q1004", Category::History, "historical military unit", 1000),
    root("Q8575586", Category::History, "military unit", 1500),
    root("Q35509", Category::History, "archaeological period", 500),
    // Government
    root("Q7188", Category::Government, "government", 2500),
    root("Q327333", Category::Government, "government agency", 3000),
    root("Q7278", Category::Government, "political party", 1000),
    root("Q1752346", Category::Government, "election", 1500),
    root("Q4407246", Category::Government, "political term", 1000),
    root("Q1063239", Category::Government, "diplomatic mission", 500),
    root("Q1549591", Category::Government, "public office", 1500),
    root("Q294163", Category::Government, "public policy", 500),
    root("Q1002697", Category::Government, "political ideology", 500),
    root("Q188913", Category::Government, "voting", 500),
    root("Q22685", Category::Government, "prime minister", 500),
    root("Q30461", Category::Government, "president", 500),
    root("Q52062", Category::Government, "national assembly", 500),
    // Philosophy
    root("Q5891", Category::Philosophy, "philosophy", 3000),
    root("Q1387659", Category::Philosophy, "philosophical concept", 1500),
    root("Q331769", Category::Philosophy, "philosophical movement", 500),
    root("Q7184903", Category::Philosophy, "philosophical school", 500),
    root("Q641118", Category::Philosophy, "logical concept", 500),
    // Culture
    root("Q132241", Category::Culture, "festival", 1500),
    root("Q9134", Category::Culture, "mythology", 1000),
    root("Q36649", Category::Culture, "tradition", 1000),
    root("Q132821", Category::Culture, "ritual", 1000),
    root("Q25295", Category::Culture, "cultural heritage", 1000),
    root("Q12758529", Category::Culture, "national symbol", 500),
    root("Q4895393", Category::Culture, "national heritage", 500),
    root("Q149918", Category::Culture, "costume", 500),
    root("Q1071", Category::Culture, "cuisine", 1000),
    root("Q106559804", Category::Culture, "cultural concept", 1000),
    root("Q13028", Category::Culture, "holiday", 500),
    root("Q210272", Category::Culture, "cultural heritage", 1000),
    // Education
    root("Q3918", Category::Education, "university", 1000),
    root("Q38723", Category::Education, "higher education institution", 1500),
    root("Q3914", Category::Education, "school", 3000),
    root("Q11303", Category::Education, "educational program", 500),
    root("Q3918409", Category::Education, "academic institution", 1000),
    root("Q189533", Category::Education, "academic degree", 500),
    root("Q194356", Category::Education, "library", 1000),
    root("Q33506", Category::Education, "museum", 1500),
    // Language
    root("Q34770", Category::Language, "language", 5000),
    root("Q33742", Category::Language, "natural language", 1000),
    root("Q315", Category::Language, "language family", 1000),
    root("Q45762", Category::Language, "sign language", 300),
    root("Q12909644", Category::Language, "linguistic concept", 1000),
    root("Q1995212", Category::Language, "word", 1000),
    // Law
    root("Q7748", Category::Law, "law", 3000),
    root("Q820655", Category::Law, "statute", 1500),
    root("Q11204", Category::Law, "court", 1000),
    root("Q3529618", Category::Law, "legal process", 500),
    root("Q5153359", Category::Law, "constitution", 500),
    root("Q93288", Category::Law, "contract", 500),
    root("Q49850", Category::Law, "legal document", 1000),
    root("Q879146", Category::Law, "legal term", 1000),
    root("Q207965", Category::Law, "criminal activity", 500),
    root("Q1079023", Category::Law, "crime", 1000),
    // Society
    root("Q43229", Category::Society, "organization", 5000),
    root("Q49773", Category::Society, "social movement", 2000),
    root("Q783794", Category::Society, "company", 2000),
    root("Q6881511", Category::Society, "enterprise", 1000),
    root("Q163740", Category::Society, "nonprofit organization", 1000),
    root("Q15911314", Category::Society, "association", 1000),
    root("Q158852", Category::Society, "social class", 500),
    root("Q18325087", Category::Society, "social group", 1000),
    // Humanities
    root("Q7058673", Category::Humanities, "art genre", 500),
    root("Q483394", Category::Humanities, "genre", 1500),
    root("Q184296", Category::Humanities, "art movement", 500),
    root("Q17362920", Category::Humanities, "literary genre", 500),
    root("Q1792379", Category::Humanities, "art genre", 500),
    root("Q735", Category::Humanities, "art", 1000),
    root("Q309", Category::Humanities, "history", 1000),
];
