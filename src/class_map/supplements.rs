//! Hand-curated classes the subclass-of closure does not reach.
//!
//! Applied after the closure pass and override whatever the closure
//! assigned.

use crate::models::Category;

pub const SUPPLEMENT_CLASSES: &[(&str, Category)] = &[
    ("Q183770", Category::Religion), // Christian creed (Nicene Creed)
    ("Q1140925", Category::Religion), // confession of faith
    ("Q1327500", Category::Religion), // church council
    ("Q1417093", Category::Religion), // ecumenical council
    ("Q108458", Category::Religion), // schism (religious)
    ("Q207628", Category::Religion), // sacred music
    ("Q1542938", Category::Religion), // religious war
    ("Q841752", Category::Religion), // iconoclasm
    ("Q42389", Category::Religion), // apostle
    ("Q327245", Category::Religion), // patriarch (church)
    ("Q193353", Category::Religion), // Christian theology
    ("Q9584", Category::Religion), // Bible
    ("Q8261", Category::Religion), // New Testament
    ("Q51626", Category::Religion), // Old Testament
    ("Q44613", Category::Religion), // monastic order
    ("Q23847174", Category::Religion), // Christian liturgy
    ("Q1193547", Category::Religion), // martyr
    ("Q105958", Category::Religion), // veneration
    ("Q51628", Category::Religion), // Holy Spirit
    ("Q37090", Category::Religion), // original sin
    ("Q102856", Category::Religion), // heresy
    ("Q160149", Category::Religion), // crusader state
    ("Q19809", Category::Religion), // Christmas
    ("Q21196", Category::Religion), // Easter
    ("Q162267", Category::Religion), // Christian theology topic
    ("Q1164038", Category::Religion), // religious belief
    ("Q2993979", Category::Religion), // theological concept
    ("Q179461", Category::Religion), // religious text
    ("Q60995", Category::Religion), // psalm
    ("Q34726", Category::Religion), // prayer
    ("Q170208", Category::Religion), // liturgy
    ("Q735827", Category::Religion), // sacrament
    ("Q3235978", Category::Religion), // religious practice
    ("Q1064858", Category::Religion), // religious denomination
    ("Q35509825", Category::Religion), // religious concept
    ("Q15180", Category::History), // Soviet Union
    ("Q7318", Category::History), // Nazi Germany
    ("Q12560", Category::History), // Middle Ages
    ("Q5873", Category::History), // Renaissance
    ("Q12544", Category::History), // Byzantine Empire
    ("Q42585", Category::History), // World War I
    ("Q362", Category::History), // World War II
    ("Q8229", Category::History), // Cold War
    ("Q12548", Category::History), // Holy Roman Empire
    ("Q170419", Category::History), // fall of Constantinople
    ("Q16939528", Category::Government), // general election in Malta
    ("Q1128324", Category::Government), // European Parliament election
    ("Q2618461", Category::Government), // election
    ("Q3068523", Category::Government), // European Parliament election in a country
    ("Q14006248", Category::Government), // election in France
    ("Q327765", Category::Government), // election in Germany
    ("Q918346", Category::Government), // election in the United Kingdom
    ("Q2991470", Category::Government), // election in Greece
    ("Q126456312", Category::Government), // EP election in Denmark
    ("Q126456824", Category::Government), // EP election in France
    ("Q126456703", Category::Government), // EP election in Germany
    ("Q126456904", Category::Government), // EP election in the UK
    ("Q25041813", Category::Government), // EP election in Greece
    ("Q17037962", Category::Government), // off-year EP election
    ("Q30461", Category::Government), // president
    ("Q484416", Category::Government), // prime minister
    ("Q24354", Category::Culture), // theatre building
    ("Q57660343", Category::Culture), // performance venue
    ("Q2310313", Category::Culture), // cultural institution
    ("Q114961210", Category::Culture), // cultural venue
    ("Q249556", Category::Society), // railway company
    ("Q17377208", Category::Society), // railway undertaking
    ("Q13417114", Category::Society), // noble family
    ("Q8436", Category::Society), // family
    ("Q1642895", Category::Society), // extended family
    ("Q193622", Category::History), // order (decoration)
    ("Q131383086", Category::History), // SS rank
    ("Q15983795", Category::History), // military rank
    ("Q428661", Category::History), // U-boat
    ("Q2811", Category::History), // submarine
    ("Q177597", Category::History), // warship type
    ("Q112872396", Category::Education), // type of educational institution
    ("Q891723", Category::Society), // public company
    ("Q46970", Category::Society), // airline
    ("Q18043413", Category::Society), // supermarket chain
    ("Q35127", Category::Society), // website
    ("Q7094076", Category::Society), // online database
    ("Q1403556", Category::Society), // reference management software
    ("Q7397", Category::Society), // software
    ("Q783794", Category::Society), // company
    ("Q6881511", Category::Society), // enterprise
    ("Q134161", Category::Society), // joint-stock company
    ("Q658255", Category::Society), // startup
    ("Q1875615", Category::Society), // transport operator
    ("Q180846", Category::Society), // supermarket
    ("Q132777643", Category::Society), // retail chain
    ("Q1076968", Category::Society), // web application
    ("Q1714118", Category::Society), // social networking service
    ("Q19967801", Category::Society), // online service
    ("Q8513", Category::Society), // database
    ("Q3427877", Category::Society), // website type
    ("Q12774177", Category::Society), // digital work
    ("Q21198342", Category::Society), // digital content
    ("Q12737077", Category::Society), // occupation
    ("Q273120", Category::History), // protest
    ("Q17524420", Category::History), // aspect of history
    ("Q37726", Category::History), // army
    ("Q67518978", Category::History), // historical occurrence
    ("Q1914636", Category::History), // political event
    ("Q180684", Category::History), // conflict
    ("Q8473", Category::History), // military organization
    ("Q176799", Category::History), // military unit
    ("Q34442", Category::Geography), // road
    ("Q1322323", Category::Geography), // transport infrastructure
    ("Q113519195", Category::Geography), // linear feature
    ("Q83620", Category::Geography), // path
    ("Q54050", Category::Geography), // hill
    ("Q8502", Category::Geography), // mountain
    ("Q4022", Category::Geography), // river
    ("Q23397", Category::Geography), // lake
    ("Q34038", Category::Geography), // waterfall
    ("Q39816", Category::Geography), // valley
    ("Q35509", Category::Geography), // cave
    ("Q180874", Category::Geography), // glacier
    ("Q39594", Category::Geography), // peninsula
    ("Q40080", Category::Geography), // beach
    ("Q3215290", Category::Geography), // neighbourhood
    ("Q5084", Category::Geography), // hamlet
    ("Q5119", Category::Geography), // capital city
    ("Q1549591", Category::Geography), // big city
    ("Q1093829", Category::Geography), // city in the US
    ("Q20667921", Category::Government), // type of French administrative division
    ("Q15617994", Category::Government), // designation for administrative unit
    ("Q4164871", Category::Government), // position
    ("Q214339", Category::Government), // post
    ("Q294414", Category::Government), // public office
    ("Q4175034", Category::Government), // head of government
    ("Q189533", Category::Education), // academic degree
    ("Q4218455", Category::Education), // academic title
    ("Q618779", Category::Education), // award
    ("Q427581", Category::Education), // honor
    ("Q4828724", Category::Culture), // aviation museum
    ("Q2516357", Category::Culture), // museum type
    ("Q33506", Category::Culture), // museum
    ("Q207694", Category::Culture), // art museum
    ("Q575727", Category::Culture), // science museum
    ("Q17431399", Category::Culture), // ethnographic museum
    ("Q121493639", Category::Language), // name particle
    ("Q10856962", Category::Language), // anthroponymy
    ("Q13196193", Category::Language), // affix
    ("Q184943", Category::Language), // suffix
    ("Q134830", Category::Language), // prefix
    ("Q101352", Category::Language), // surname
    ("Q10541491", Category::Law), // legal form
];
