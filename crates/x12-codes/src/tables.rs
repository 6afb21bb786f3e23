//! X12 834 (005010X220A1) code sets
//!
//! Entries that segment builders use as defaults are declared as constants
//! ahead of the tables that contain them, so a default never depends on a
//! table having been built.

use crate::lookup::{CodeEntry, CodeSet};
use std::sync::LazyLock;

// ============================================================================
// Default entries
// ============================================================================

pub const NO_AUTHORIZATION_INFORMATION: CodeEntry = CodeEntry::new(
    "00",
    "NO_AUTHORIZATION_INFORMATION",
    "No Authorization Information Present",
);
pub const NO_SECURITY_INFORMATION: CodeEntry = CodeEntry::new(
    "00",
    "NO_SECURITY_INFORMATION",
    "No Security Information Present",
);
pub const MUTUALLY_DEFINED_INTERCHANGE_ID: CodeEntry =
    CodeEntry::new("ZZ", "MUTUALLY_DEFINED", "Mutually Defined");
pub const NO_ACKNOWLEDGMENT: CodeEntry = CodeEntry::new(
    "0",
    "NO_ACKNOWLEDGMENT",
    "No Interchange Acknowledgment Requested",
);
pub const PRODUCTION_DATA: CodeEntry = CodeEntry::new("P", "PRODUCTION", "Production Data");
pub const BENEFIT_ENROLLMENT_GROUP: CodeEntry = CodeEntry::new(
    "BE",
    "BENEFIT_ENROLLMENT_AND_MAINTENANCE",
    "Benefit Enrollment and Maintenance (834)",
);
pub const ACCREDITED_STANDARDS_COMMITTEE_X12: CodeEntry = CodeEntry::new(
    "X",
    "ACCREDITED_STANDARDS_COMMITTEE_X12",
    "Accredited Standards Committee X12",
);
pub const BENEFIT_ENROLLMENT_TRANSACTION: CodeEntry = CodeEntry::new(
    "834",
    "BENEFIT_ENROLLMENT_AND_MAINTENANCE",
    "Benefit Enrollment and Maintenance",
);
pub const ORIGINAL: CodeEntry = CodeEntry::new("00", "ORIGINAL", "Original");
pub const PERSON: CodeEntry = CodeEntry::new("1", "PERSON", "Person");
pub const INSURED_OR_SUBSCRIBER: CodeEntry =
    CodeEntry::new("IL", "INSURED_OR_SUBSCRIBER", "Insured or Subscriber");
pub const DATE_CCYYMMDD: CodeEntry =
    CodeEntry::new("D8", "DATE", "Date Expressed in Format CCYYMMDD");
pub const DATE_RANGE_CCYYMMDD: CodeEntry = CodeEntry::new(
    "RD8",
    "DATE_RANGE",
    "Range of Dates Expressed in Format CCYYMMDD-CCYYMMDD",
);
pub const SELF: CodeEntry = CodeEntry::new("18", "SELF", "Self");
pub const YES: CodeEntry = CodeEntry::new("Y", "YES", "Yes");

// ============================================================================
// Interchange and functional group envelope
// ============================================================================

/// ISA01
pub static AUTHORIZATION_INFORMATION_QUALIFIER: LazyLock<CodeSet> = LazyLock::new(|| {
    CodeSet::new(
        "Authorization Information Qualifier",
        &[
            NO_AUTHORIZATION_INFORMATION,
            CodeEntry::new(
                "03",
                "ADDITIONAL_DATA_IDENTIFICATION",
                "Additional Data Identification",
            ),
        ],
    )
    .with_aliases(&[
        ("none", "00"),
        ("no authorization", "00"),
        ("additional data", "03"),
    ])
});

/// ISA03
pub static SECURITY_INFORMATION_QUALIFIER: LazyLock<CodeSet> = LazyLock::new(|| {
    CodeSet::new(
        "Security Information Qualifier",
        &[
            NO_SECURITY_INFORMATION,
            CodeEntry::new("01", "PASSWORD", "Password"),
        ],
    )
    .with_aliases(&[("none", "00"), ("no security", "00"), ("pwd", "01")])
});

/// ISA05 and ISA07
pub static INTERCHANGE_ID_QUALIFIER: LazyLock<CodeSet> = LazyLock::new(|| {
    CodeSet::new(
        "Interchange ID Qualifier",
        &[
            CodeEntry::new("01", "DUNS", "Duns (Dun & Bradstreet)"),
            CodeEntry::new("14", "DUNS_PLUS_SUFFIX", "Duns Plus Suffix"),
            CodeEntry::new("20", "HEALTH_INDUSTRY_NUMBER", "Health Industry Number (HIN)"),
            CodeEntry::new(
                "27",
                "CARRIER_IDENTIFICATION_NUMBER",
                "Carrier Identification Number as assigned by Health Care Financing Administration (HCFA)",
            ),
            CodeEntry::new(
                "28",
                "FISCAL_INTERMEDIARY_IDENTIFICATION_NUMBER",
                "Fiscal Intermediary Identification Number as assigned by Health Care Financing Administration (HCFA)",
            ),
            CodeEntry::new(
                "29",
                "MEDICARE_PROVIDER_AND_SUPPLIER_IDENTIFICATION_NUMBER",
                "Medicare Provider and Supplier Identification Number as assigned by Health Care Financing Administration (HCFA)",
            ),
            CodeEntry::new(
                "30",
                "FEDERAL_TAX_IDENTIFICATION_NUMBER",
                "U.S. Federal Tax Identification Number",
            ),
            CodeEntry::new(
                "33",
                "NAIC_COMPANY_CODE",
                "National Association of Insurance Commissioners Company Code (NAIC)",
            ),
            MUTUALLY_DEFINED_INTERCHANGE_ID,
        ],
    )
    .with_aliases(&[
        ("hin", "20"),
        ("tax id", "30"),
        ("tin", "30"),
        ("fein", "30"),
        ("ein", "30"),
        ("naic", "33"),
        ("custom", "ZZ"),
    ])
});

/// ISA14
pub static ACKNOWLEDGMENT_REQUESTED: LazyLock<CodeSet> = LazyLock::new(|| {
    CodeSet::new(
        "Acknowledgment Requested",
        &[
            NO_ACKNOWLEDGMENT,
            CodeEntry::new(
                "1",
                "INTERCHANGE_ACKNOWLEDGMENT_REQUESTED",
                "Interchange Acknowledgment Requested (TA1)",
            ),
        ],
    )
    .with_aliases(&[("no", "0"), ("yes", "1"), ("ta1", "1")])
});

/// ISA15
pub static USAGE_INDICATOR: LazyLock<CodeSet> = LazyLock::new(|| {
    CodeSet::new(
        "Interchange Usage Indicator",
        &[
            CodeEntry::new("I", "INFORMATION", "Information"),
            PRODUCTION_DATA,
            CodeEntry::new("T", "TEST", "Test Data"),
        ],
    )
    .with_aliases(&[
        ("prod", "P"),
        ("live", "P"),
        ("testing", "T"),
        ("info", "I"),
    ])
});

/// GS01
pub static FUNCTIONAL_IDENTIFIER_CODE: LazyLock<CodeSet> = LazyLock::new(|| {
    CodeSet::new("Functional Identifier Code", &[BENEFIT_ENROLLMENT_GROUP])
        .with_aliases(&[("834", "BE"), ("enrollment", "BE")])
});

/// GS07
pub static RESPONSIBLE_AGENCY_CODE: LazyLock<CodeSet> = LazyLock::new(|| {
    CodeSet::new(
        "Responsible Agency Code",
        &[
            CodeEntry::new(
                "T",
                "TRANSPORTATION_DATA_COORDINATING_COMMITTEE",
                "Transportation Data Coordinating Committee (TDCC)",
            ),
            ACCREDITED_STANDARDS_COMMITTEE_X12,
        ],
    )
    .with_aliases(&[("x12", "X"), ("asc x12", "X"), ("tdcc", "T")])
});

// ============================================================================
// Transaction set header
// ============================================================================

/// ST01
pub static TRANSACTION_SET_IDENTIFIER_CODE: LazyLock<CodeSet> = LazyLock::new(|| {
    CodeSet::new(
        "Transaction Set Identifier Code",
        &[BENEFIT_ENROLLMENT_TRANSACTION],
    )
    .with_aliases(&[("enrollment", "834"), ("benefit enrollment", "834")])
});

/// BGN01
pub static TRANSACTION_SET_PURPOSE_CODE: LazyLock<CodeSet> = LazyLock::new(|| {
    CodeSet::new(
        "Transaction Set Purpose Code",
        &[
            ORIGINAL,
            CodeEntry::new("15", "RE_SUBMISSION", "Re-Submission"),
            CodeEntry::new("22", "INFORMATION_COPY", "Information Copy"),
        ],
    )
    .with_aliases(&[
        ("new", "00"),
        ("resubmission", "15"),
        ("resend", "15"),
        ("copy", "22"),
        ("info", "22"),
    ])
});

/// BGN05
pub static TIME_CODE: LazyLock<CodeSet> = LazyLock::new(|| {
    CodeSet::new(
        "Time Code",
        &[
            CodeEntry::new("AD", "ALASKA_DAYLIGHT_TIME", "Alaska Daylight Time"),
            CodeEntry::new("AS", "ALASKA_STANDARD_TIME", "Alaska Standard Time"),
            CodeEntry::new("AT", "ALASKA_TIME", "Alaska Time"),
            CodeEntry::new("CD", "CENTRAL_DAYLIGHT_TIME", "Central Daylight Time"),
            CodeEntry::new("CS", "CENTRAL_STANDARD_TIME", "Central Standard Time"),
            CodeEntry::new("CT", "CENTRAL_TIME", "Central Time"),
            CodeEntry::new("ED", "EASTERN_DAYLIGHT_TIME", "Eastern Daylight Time"),
            CodeEntry::new("ES", "EASTERN_STANDARD_TIME", "Eastern Standard Time"),
            CodeEntry::new("ET", "EASTERN_TIME", "Eastern Time"),
            CodeEntry::new(
                "HD",
                "HAWAII_ALEUTIAN_DAYLIGHT_TIME",
                "Hawaii-Aleutian Daylight Time",
            ),
            CodeEntry::new(
                "HS",
                "HAWAII_ALEUTIAN_STANDARD_TIME",
                "Hawaii-Aleutian Standard Time",
            ),
            CodeEntry::new("HT", "HAWAII_ALEUTIAN_TIME", "Hawaii-Aleutian Time"),
            CodeEntry::new("LT", "LOCAL_TIME", "Local Time"),
            CodeEntry::new("MD", "MOUNTAIN_DAYLIGHT_TIME", "Mountain Daylight Time"),
            CodeEntry::new("MS", "MOUNTAIN_STANDARD_TIME", "Mountain Standard Time"),
            CodeEntry::new("MT", "MOUNTAIN_TIME", "Mountain Time"),
            CodeEntry::new("PD", "PACIFIC_DAYLIGHT_TIME", "Pacific Daylight Time"),
            CodeEntry::new("PS", "PACIFIC_STANDARD_TIME", "Pacific Standard Time"),
            CodeEntry::new("PT", "PACIFIC_TIME", "Pacific Time"),
            CodeEntry::new("UT", "UNIVERSAL_TIME_COORDINATE", "Universal Time Coordinate"),
        ],
    )
    .with_aliases(&[
        ("eastern", "ET"),
        ("central", "CT"),
        ("mountain", "MT"),
        ("pacific", "PT"),
        ("alaska", "AT"),
        ("hawaii", "HT"),
        ("local", "LT"),
        ("utc", "UT"),
        ("gmt", "UT"),
        ("zulu", "UT"),
        ("est", "ES"),
        ("edt", "ED"),
        ("cst", "CS"),
        ("cdt", "CD"),
        ("mst", "MS"),
        ("mdt", "MD"),
        ("pst", "PS"),
        ("pdt", "PD"),
    ])
});

/// BGN08
pub static ACTION_CODE: LazyLock<CodeSet> = LazyLock::new(|| {
    CodeSet::new(
        "Action Code",
        &[
            CodeEntry::new("2", "CHANGE", "Change (Update)"),
            CodeEntry::new("4", "VERIFY", "Verify"),
            CodeEntry::new("RX", "REPLACE", "Replace"),
        ],
    )
    .with_aliases(&[
        ("update", "2"),
        ("audit", "4"),
        ("full file", "RX"),
        ("full replacement", "RX"),
    ])
});

// ============================================================================
// Names and identifiers
// ============================================================================

/// N101 and NM101
pub static ENTITY_IDENTIFIER_CODE: LazyLock<CodeSet> = LazyLock::new(|| {
    CodeSet::new(
        "Entity Identifier Code",
        &[
            CodeEntry::new("31", "POSTAL_MAILING_ADDRESS", "Postal Mailing Address"),
            CodeEntry::new("36", "EMPLOYER", "Employer"),
            CodeEntry::new("45", "DROP_OFF_LOCATION", "Drop-off Location"),
            CodeEntry::new("70", "PRIOR_INCORRECT_INSURED", "Prior Incorrect Insured"),
            CodeEntry::new("74", "CORRECTED_INSURED", "Corrected Insured"),
            CodeEntry::new("75", "PARTICIPANT", "Participant"),
            CodeEntry::new("BO", "BROKER_OR_SALES_OFFICE", "Broker or Sales Office"),
            CodeEntry::new(
                "E1",
                "PERSON_OR_OTHER_ENTITY_LEGALLY_RESPONSIBLE_FOR_A_CHILD",
                "Person or Other Entity Legally Responsible for a Child",
            ),
            CodeEntry::new("EXS", "EX_SPOUSE", "Ex-spouse"),
            CodeEntry::new("GD", "GUARDIAN", "Guardian"),
            INSURED_OR_SUBSCRIBER,
            CodeEntry::new("IN", "INSURER", "Insurer"),
            CodeEntry::new("J6", "POWER_OF_ATTORNEY", "Power of Attorney"),
            CodeEntry::new("P5", "PLAN_SPONSOR", "Plan Sponsor"),
            CodeEntry::new("QD", "RESPONSIBLE_PARTY", "Responsible Party"),
            CodeEntry::new("S3", "CUSTODIAL_PARENT", "Custodial Parent"),
            CodeEntry::new(
                "TV",
                "THIRD_PARTY_ADMINISTRATOR",
                "Third Party Administrator (TPA)",
            ),
        ],
    )
    .with_aliases(&[
        ("sponsor", "P5"),
        ("payer", "IN"),
        ("carrier", "IN"),
        ("tpa", "TV"),
        ("broker", "BO"),
        ("agent", "BO"),
        ("subscriber", "IL"),
        ("member", "IL"),
        ("insured", "IL"),
        ("mailing address", "31"),
        ("corrected", "74"),
    ])
});

/// NM102
pub static ENTITY_TYPE_QUALIFIER: LazyLock<CodeSet> = LazyLock::new(|| {
    CodeSet::new(
        "Entity Type Qualifier",
        &[
            PERSON,
            CodeEntry::new("2", "NON_PERSON_ENTITY", "Non-Person Entity"),
        ],
    )
    .with_aliases(&[
        ("individual", "1"),
        ("organization", "2"),
        ("company", "2"),
    ])
});

/// N103 and NM108
pub static IDENTIFICATION_CODE_QUALIFIER: LazyLock<CodeSet> = LazyLock::new(|| {
    CodeSet::new(
        "Identification Code Qualifier",
        &[
            CodeEntry::new("1", "DUNS", "D-U-N-S Number, Dun & Bradstreet"),
            CodeEntry::new(
                "9",
                "DUNS_PLUS_SUFFIX",
                "D-U-N-S+4, D-U-N-S Number with Four Character Suffix",
            ),
            CodeEntry::new(
                "24",
                "EMPLOYER_IDENTIFICATION_NUMBER",
                "Employer's Identification Number",
            ),
            CodeEntry::new("34", "SOCIAL_SECURITY_NUMBER", "Social Security Number"),
            CodeEntry::new(
                "94",
                "CODE_ASSIGNED_BY_ORGANIZATION",
                "Code assigned by the organization that is the ultimate destination of the transaction set",
            ),
            CodeEntry::new(
                "FI",
                "FEDERAL_TAXPAYER_IDENTIFICATION_NUMBER",
                "Federal Taxpayer's Identification Number",
            ),
            CodeEntry::new(
                "XV",
                "CMS_PLAN_ID",
                "Centers for Medicare and Medicaid Services PlanID",
            ),
            CodeEntry::new("ZZ", "MUTUALLY_DEFINED", "Mutually Defined"),
        ],
    )
    .with_aliases(&[
        ("ein", "24"),
        ("ssn", "34"),
        ("tin", "FI"),
        ("fein", "FI"),
        ("tax id", "FI"),
        ("plan id", "XV"),
        ("custom", "ZZ"),
    ])
});

/// REF01
pub static REFERENCE_IDENTIFICATION_QUALIFIER: LazyLock<CodeSet> = LazyLock::new(|| {
    CodeSet::new(
        "Reference Identification Qualifier",
        &[
            CodeEntry::new("0F", "SUBSCRIBER_NUMBER", "Subscriber Number"),
            CodeEntry::new("17", "CLIENT_REPORTING_CATEGORY", "Client Reporting Category"),
            CodeEntry::new("1L", "GROUP_OR_POLICY_NUMBER", "Group or Policy Number"),
            CodeEntry::new("23", "CLIENT_NUMBER", "Client Number"),
            CodeEntry::new("38", "MASTER_POLICY_NUMBER", "Master Policy Number"),
            CodeEntry::new("3H", "CASE_NUMBER", "Case Number"),
            CodeEntry::new(
                "4A",
                "PERSONAL_IDENTIFICATION_NUMBER",
                "Personal Identification Number (PIN)",
            ),
            CodeEntry::new("6O", "CROSS_REFERENCE_NUMBER", "Cross Reference Number"),
            CodeEntry::new("ABB", "PERSONAL_ID_NUMBER", "Personal ID Number"),
            CodeEntry::new("DX", "DEPARTMENT_AGENCY_NUMBER", "Department/Agency Number"),
            CodeEntry::new(
                "F6",
                "HEALTH_INSURANCE_CLAIM_NUMBER",
                "Health Insurance Claim (HIC) Number",
            ),
            CodeEntry::new("Q4", "PRIOR_IDENTIFIER_NUMBER", "Prior Identifier Number"),
            CodeEntry::new("QQ", "UNIT_NUMBER", "Unit Number"),
            CodeEntry::new("ZZ", "MUTUALLY_DEFINED", "Mutually Defined"),
        ],
    )
    .with_aliases(&[
        ("member id", "0F"),
        ("subscriber id", "0F"),
        ("group", "1L"),
        ("group number", "1L"),
        ("policy number", "1L"),
        ("master policy", "38"),
        ("medicare", "F6"),
        ("hicn", "F6"),
        ("pin", "4A"),
    ])
});

// ============================================================================
// Member level detail
// ============================================================================

/// INS01
pub static YES_NO_CONDITION: LazyLock<CodeSet> = LazyLock::new(|| {
    CodeSet::new(
        "Yes/No Condition or Response Code",
        &[CodeEntry::new("N", "NO", "No"), YES],
    )
    .with_aliases(&[
        ("true", "Y"),
        ("false", "N"),
        ("t", "Y"),
        ("f", "N"),
        ("subscriber", "Y"),
        ("dependent", "N"),
    ])
});

/// INS02
pub static INDIVIDUAL_RELATIONSHIP_CODE: LazyLock<CodeSet> = LazyLock::new(|| {
    CodeSet::new(
        "Individual Relationship Code",
        &[
            CodeEntry::new("01", "SPOUSE", "Spouse"),
            CodeEntry::new("03", "FATHER_OR_MOTHER", "Father or Mother"),
            CodeEntry::new("04", "GRANDFATHER_OR_GRANDMOTHER", "Grandfather or Grandmother"),
            CodeEntry::new("05", "GRANDSON_OR_GRANDDAUGHTER", "Grandson or Granddaughter"),
            CodeEntry::new("06", "UNCLE_OR_AUNT", "Uncle or Aunt"),
            CodeEntry::new("07", "NEPHEW_OR_NIECE", "Nephew or Niece"),
            CodeEntry::new("08", "COUSIN", "Cousin"),
            CodeEntry::new("09", "ADOPTED_CHILD", "Adopted Child"),
            CodeEntry::new("10", "FOSTER_CHILD", "Foster Child"),
            CodeEntry::new(
                "11",
                "SON_IN_LAW_OR_DAUGHTER_IN_LAW",
                "Son-in-law or Daughter-in-law",
            ),
            CodeEntry::new(
                "12",
                "BROTHER_IN_LAW_OR_SISTER_IN_LAW",
                "Brother-in-law or Sister-in-law",
            ),
            CodeEntry::new(
                "13",
                "MOTHER_IN_LAW_OR_FATHER_IN_LAW",
                "Mother-in-law or Father-in-law",
            ),
            CodeEntry::new("14", "BROTHER_OR_SISTER", "Brother or Sister"),
            CodeEntry::new("15", "WARD", "Ward"),
            CodeEntry::new("16", "STEPPARENT", "Stepparent"),
            CodeEntry::new("17", "STEPSON_OR_STEPDAUGHTER", "Stepson or Stepdaughter"),
            SELF,
            CodeEntry::new("19", "CHILD", "Child"),
            CodeEntry::new("23", "SPONSORED_DEPENDENT", "Sponsored Dependent"),
            CodeEntry::new(
                "24",
                "DEPENDENT_OF_A_MINOR_DEPENDENT",
                "Dependent of a Minor Dependent",
            ),
            CodeEntry::new("25", "EX_SPOUSE", "Ex-spouse"),
            CodeEntry::new("26", "GUARDIAN", "Guardian"),
            CodeEntry::new("31", "COURT_APPOINTED_GUARDIAN", "Court Appointed Guardian"),
            CodeEntry::new("38", "COLLATERAL_DEPENDENT", "Collateral Dependent"),
            CodeEntry::new("53", "LIFE_PARTNER", "Life Partner"),
            CodeEntry::new("60", "ANNUITANT", "Annuitant"),
            CodeEntry::new("D2", "TRUSTEE", "Trustee"),
            CodeEntry::new("G8", "OTHER_RELATIONSHIP", "Other Relationship"),
            CodeEntry::new("G9", "OTHER_RELATIVE", "Other Relative"),
        ],
    )
    .with_aliases(&[
        ("subscriber", "18"),
        ("employee", "18"),
        ("husband", "01"),
        ("wife", "01"),
        ("son", "19"),
        ("daughter", "19"),
        ("partner", "53"),
        ("domestic partner", "53"),
        ("stepchild", "17"),
        ("other", "G8"),
    ])
});

/// INS03 and HD01
pub static MAINTENANCE_TYPE_CODE: LazyLock<CodeSet> = LazyLock::new(|| {
    CodeSet::new(
        "Maintenance Type Code",
        &[
            CodeEntry::new("001", "CHANGE", "Change"),
            CodeEntry::new("021", "ADDITION", "Addition"),
            CodeEntry::new(
                "024",
                "CANCELLATION_OR_TERMINATION",
                "Cancellation or Termination",
            ),
            CodeEntry::new("025", "REINSTATEMENT", "Reinstatement"),
            CodeEntry::new("030", "AUDIT_OR_COMPARE", "Audit or Compare"),
        ],
    )
    .with_aliases(&[
        ("update", "001"),
        ("add", "021"),
        ("new", "021"),
        ("enroll", "021"),
        ("term", "024"),
        ("terminate", "024"),
        ("cancel", "024"),
        ("reinstate", "025"),
        ("audit", "030"),
        ("compare", "030"),
    ])
});

/// INS04
pub static MAINTENANCE_REASON_CODE: LazyLock<CodeSet> = LazyLock::new(|| {
    CodeSet::new(
        "Maintenance Reason Code",
        &[
            CodeEntry::new("01", "DIVORCE", "Divorce"),
            CodeEntry::new("02", "BIRTH", "Birth"),
            CodeEntry::new("03", "DEATH", "Death"),
            CodeEntry::new("04", "RETIREMENT", "Retirement"),
            CodeEntry::new("05", "ADOPTION", "Adoption"),
            CodeEntry::new("06", "STRIKE", "Strike"),
            CodeEntry::new("07", "TERMINATION_OF_BENEFITS", "Termination of Benefits"),
            CodeEntry::new("08", "TERMINATION_OF_EMPLOYMENT", "Termination of Employment"),
            CodeEntry::new(
                "09",
                "COBRA",
                "Consolidated Omnibus Budget Reconciliation Act (COBRA)",
            ),
            CodeEntry::new(
                "10",
                "COBRA_PREMIUM_PAID",
                "Consolidated Omnibus Budget Reconciliation Act (COBRA) Premium Paid",
            ),
            CodeEntry::new("11", "SURVIVING_SPOUSE", "Surviving Spouse"),
            CodeEntry::new("14", "VOLUNTARY_WITHDRAWAL", "Voluntary Withdrawal"),
            CodeEntry::new(
                "15",
                "PRIMARY_CARE_PROVIDER_CHANGE",
                "Primary Care Provider (PCP) Change",
            ),
            CodeEntry::new("16", "QUIT", "Quit"),
            CodeEntry::new("17", "FIRED", "Fired"),
            CodeEntry::new("18", "SUSPENDED", "Suspended"),
            CodeEntry::new("20", "ACTIVE", "Active"),
            CodeEntry::new("21", "DISABILITY", "Disability"),
            CodeEntry::new("22", "PLAN_CHANGE", "Plan Change"),
            CodeEntry::new(
                "25",
                "CHANGE_IN_IDENTIFYING_DATA_ELEMENTS",
                "Change in Identifying Data Elements",
            ),
            CodeEntry::new("26", "DECLINED_COVERAGE", "Declined Coverage"),
            CodeEntry::new("27", "PRE_ENROLLMENT", "Pre-Enrollment"),
            CodeEntry::new("28", "INITIAL_ENROLLMENT", "Initial Enrollment"),
            CodeEntry::new("29", "BENEFIT_SELECTION", "Benefit Selection"),
            CodeEntry::new("31", "LEGAL_SEPARATION", "Legal Separation"),
            CodeEntry::new("32", "MARRIAGE", "Marriage"),
            CodeEntry::new("33", "PERSONNEL_DATA", "Personnel Data"),
            CodeEntry::new(
                "37",
                "LEAVE_OF_ABSENCE_WITH_BENEFITS",
                "Leave of Absence with Benefits",
            ),
            CodeEntry::new(
                "38",
                "LEAVE_OF_ABSENCE_WITHOUT_BENEFITS",
                "Leave of Absence without Benefits",
            ),
            CodeEntry::new("39", "LAY_OFF_WITH_BENEFITS", "Lay Off with Benefits"),
            CodeEntry::new("40", "LAY_OFF_WITHOUT_BENEFITS", "Lay Off without Benefits"),
            CodeEntry::new("41", "RE_ENROLLMENT", "Re-enrollment"),
            CodeEntry::new("43", "CHANGE_OF_LOCATION", "Change of Location"),
            CodeEntry::new("59", "NON_PAYMENT", "Non Payment"),
            CodeEntry::new("AI", "NO_REASON_GIVEN", "No Reason Given"),
            CodeEntry::new("EC", "MEMBER_BENEFIT_SELECTION", "Member Benefit Selection"),
            CodeEntry::new("XN", "NOTIFICATION_ONLY", "Notification Only"),
            CodeEntry::new("XT", "TRANSFER", "Transfer"),
        ],
    )
    .with_aliases(&[
        ("divorced", "01"),
        ("newborn", "02"),
        ("deceased", "03"),
        ("retired", "04"),
        ("new hire", "28"),
        ("initial", "28"),
        ("married", "32"),
        ("demographic change", "25"),
        ("no reason", "AI"),
        ("none", "AI"),
    ])
});

/// INS05
pub static BENEFIT_STATUS_CODE: LazyLock<CodeSet> = LazyLock::new(|| {
    CodeSet::new(
        "Benefit Status Code",
        &[
            CodeEntry::new("A", "ACTIVE", "Active"),
            CodeEntry::new(
                "C",
                "COBRA",
                "Consolidated Omnibus Budget Reconciliation Act (COBRA)",
            ),
            CodeEntry::new("S", "SURVIVING_INSURED", "Surviving Insured"),
            CodeEntry::new(
                "T",
                "TEFRA",
                "Tax Equity and Fiscal Responsibility Act (TEFRA)",
            ),
        ],
    )
    .with_aliases(&[("continuation", "C"), ("surviving", "S")])
});

/// INS08
pub static EMPLOYMENT_STATUS_CODE: LazyLock<CodeSet> = LazyLock::new(|| {
    CodeSet::new(
        "Employment Status Code",
        &[
            CodeEntry::new("AC", "ACTIVE", "Active"),
            CodeEntry::new("AO", "ACTIVE_MILITARY_OVERSEAS", "Active Military - Overseas"),
            CodeEntry::new("AU", "ACTIVE_MILITARY_USA", "Active Military - USA"),
            CodeEntry::new("FT", "FULL_TIME", "Full-time"),
            CodeEntry::new("L1", "LEAVE_OF_ABSENCE", "Leave of Absence"),
            CodeEntry::new("PT", "PART_TIME", "Part-time"),
            CodeEntry::new("RT", "RETIRED", "Retired"),
            CodeEntry::new("TE", "TERMINATED", "Terminated"),
        ],
    )
    .with_aliases(&[
        ("full time", "FT"),
        ("fulltime", "FT"),
        ("part time", "PT"),
        ("parttime", "PT"),
        ("loa", "L1"),
        ("leave", "L1"),
        ("retiree", "RT"),
        ("term", "TE"),
    ])
});

// ============================================================================
// Health coverage
// ============================================================================

/// HD03
pub static INSURANCE_LINE_CODE: LazyLock<CodeSet> = LazyLock::new(|| {
    CodeSet::new(
        "Insurance Line Code",
        &[
            CodeEntry::new("AG", "PREVENTATIVE_CARE", "Preventative Care/Wellness"),
            CodeEntry::new("AH", "TWENTY_FOUR_HOUR_CARE", "24 Hour Care"),
            CodeEntry::new("AJ", "MEDICARE_RISK", "Medicare Risk"),
            CodeEntry::new("AK", "MENTAL_HEALTH", "Mental Health"),
            CodeEntry::new("DCP", "DENTAL_CAPITATION", "Dental Capitation"),
            CodeEntry::new("DEN", "DENTAL", "Dental"),
            CodeEntry::new(
                "EPO",
                "EXCLUSIVE_PROVIDER_ORGANIZATION",
                "Exclusive Provider Organization",
            ),
            CodeEntry::new("FAC", "FACILITY", "Facility"),
            CodeEntry::new("HE", "HEARING", "Hearing"),
            CodeEntry::new("HLT", "HEALTH", "Health"),
            CodeEntry::new(
                "HMO",
                "HEALTH_MAINTENANCE_ORGANIZATION",
                "Health Maintenance Organization",
            ),
            CodeEntry::new("LTC", "LONG_TERM_CARE", "Long-Term Care"),
            CodeEntry::new("LTD", "LONG_TERM_DISABILITY", "Long-Term Disability"),
            CodeEntry::new("MM", "MAJOR_MEDICAL", "Major Medical"),
            CodeEntry::new("MOD", "MAIL_ORDER_DRUG", "Mail Order Drug"),
            CodeEntry::new("PDG", "PRESCRIPTION_DRUG", "Prescription Drug"),
            CodeEntry::new("POS", "POINT_OF_SERVICE", "Point of Service"),
            CodeEntry::new(
                "PPO",
                "PREFERRED_PROVIDER_ORGANIZATION",
                "Preferred Provider Organization",
            ),
            CodeEntry::new("PRA", "PRACTITIONERS", "Practitioners"),
            CodeEntry::new("STD", "SHORT_TERM_DISABILITY", "Short-Term Disability"),
            CodeEntry::new("UR", "UTILIZATION_REVIEW", "Utilization Review"),
            CodeEntry::new("VIS", "VISION", "Vision"),
        ],
    )
    .with_aliases(&[
        ("medical", "HLT"),
        ("rx", "PDG"),
        ("pharmacy", "PDG"),
        ("drug", "PDG"),
        ("eye", "VIS"),
        ("wellness", "AG"),
        ("behavioral health", "AK"),
        ("mail order", "MOD"),
    ])
});

/// HD05
pub static COVERAGE_LEVEL_CODE: LazyLock<CodeSet> = LazyLock::new(|| {
    CodeSet::new(
        "Coverage Level Code",
        &[
            CodeEntry::new("CHD", "CHILDREN_ONLY", "Children Only"),
            CodeEntry::new("DEP", "DEPENDENTS_ONLY", "Dependents Only"),
            CodeEntry::new("E1D", "EMPLOYEE_AND_ONE_DEPENDENT", "Employee and One Dependent"),
            CodeEntry::new(
                "E2D",
                "EMPLOYEE_AND_TWO_DEPENDENTS",
                "Employee and Two Dependents",
            ),
            CodeEntry::new(
                "E3D",
                "EMPLOYEE_AND_THREE_DEPENDENTS",
                "Employee and Three Dependents",
            ),
            CodeEntry::new(
                "E5D",
                "EMPLOYEE_AND_ONE_OR_MORE_DEPENDENTS",
                "Employee and One or More Dependents",
            ),
            CodeEntry::new(
                "E6D",
                "EMPLOYEE_AND_TWO_OR_MORE_DEPENDENTS",
                "Employee and Two or More Dependents",
            ),
            CodeEntry::new(
                "E7D",
                "EMPLOYEE_AND_THREE_OR_MORE_DEPENDENTS",
                "Employee and Three or More Dependents",
            ),
            CodeEntry::new("ECH", "EMPLOYEE_AND_CHILDREN", "Employee and Children"),
            CodeEntry::new("EMP", "EMPLOYEE_ONLY", "Employee Only"),
            CodeEntry::new("ESP", "EMPLOYEE_AND_SPOUSE", "Employee and Spouse"),
            CodeEntry::new("FAM", "FAMILY", "Family"),
            CodeEntry::new("IND", "INDIVIDUAL", "Individual"),
            CodeEntry::new("SPC", "SPOUSE_AND_CHILDREN", "Spouse and Children"),
            CodeEntry::new("SPO", "SPOUSE_ONLY", "Spouse Only"),
            CodeEntry::new("TWO", "TWO_PARTY", "Two Party"),
        ],
    )
    .with_aliases(&[
        ("single", "EMP"),
        ("employee", "EMP"),
        ("ee", "EMP"),
        ("ee+sp", "ESP"),
        ("ee+spouse", "ESP"),
        ("ee+ch", "ECH"),
        ("ee+children", "ECH"),
        ("ee+1", "E1D"),
        ("ee+2", "E2D"),
        ("two person", "TWO"),
    ])
});

// ============================================================================
// Dates
// ============================================================================

/// DTP01
pub static DATE_TIME_QUALIFIER: LazyLock<CodeSet> = LazyLock::new(|| {
    CodeSet::new(
        "Date Time Qualifier",
        &[
            CodeEntry::new("007", "EFFECTIVE", "Effective"),
            CodeEntry::new("050", "RECEIVED", "Received"),
            CodeEntry::new("090", "REPORT_START", "Report Start"),
            CodeEntry::new("091", "REPORT_END", "Report End"),
            CodeEntry::new("286", "RETIREMENT", "Retirement"),
            CodeEntry::new(
                "296",
                "INITIAL_DISABILITY_PERIOD_RETURN_TO_WORK",
                "Initial Disability Period Return To Work",
            ),
            CodeEntry::new(
                "297",
                "INITIAL_DISABILITY_PERIOD_LAST_DAY_WORKED",
                "Initial Disability Period Last Day Worked",
            ),
            CodeEntry::new("300", "ENROLLMENT_SIGNATURE_DATE", "Enrollment Signature Date"),
            CodeEntry::new(
                "301",
                "COBRA_QUALIFYING_EVENT",
                "Consolidated Omnibus Budget Reconciliation Act (COBRA) Qualifying Event",
            ),
            CodeEntry::new("303", "MAINTENANCE_EFFECTIVE", "Maintenance Effective"),
            CodeEntry::new("336", "EMPLOYMENT_BEGIN", "Employment Begin"),
            CodeEntry::new("337", "EMPLOYMENT_END", "Employment End"),
            CodeEntry::new("338", "MEDICARE_BEGIN", "Medicare Begin"),
            CodeEntry::new("339", "MEDICARE_END", "Medicare End"),
            CodeEntry::new(
                "340",
                "COBRA_BEGIN",
                "Consolidated Omnibus Budget Reconciliation Act (COBRA) Begin",
            ),
            CodeEntry::new(
                "341",
                "COBRA_END",
                "Consolidated Omnibus Budget Reconciliation Act (COBRA) End",
            ),
            CodeEntry::new("343", "PREMIUM_PAID_TO_DATE_END", "Premium Paid to Date End"),
            CodeEntry::new("348", "BENEFIT_BEGIN", "Benefit Begin"),
            CodeEntry::new("349", "BENEFIT_END", "Benefit End"),
            CodeEntry::new("350", "EDUCATION_BEGIN", "Education Begin"),
            CodeEntry::new("351", "EDUCATION_END", "Education End"),
            CodeEntry::new("356", "ELIGIBILITY_BEGIN", "Eligibility Begin"),
            CodeEntry::new("357", "ELIGIBILITY_END", "Eligibility End"),
            CodeEntry::new("382", "ENROLLMENT", "Enrollment"),
            CodeEntry::new("383", "ADJUSTED_HIRE", "Adjusted Hire"),
            CodeEntry::new("473", "MEDICAID_BEGIN", "Medicaid Begin"),
            CodeEntry::new("474", "MEDICAID_END", "Medicaid End"),
            CodeEntry::new("543", "LAST_PREMIUM_PAID_DATE", "Last Premium Paid Date"),
            CodeEntry::new("695", "PREVIOUS_PERIOD", "Previous Period"),
        ],
    )
    .with_aliases(&[
        ("file effective", "007"),
        ("start", "348"),
        ("coverage start", "348"),
        ("coverage begin", "348"),
        ("end", "349"),
        ("coverage end", "349"),
        ("termination", "349"),
        ("hire", "336"),
        ("hire date", "336"),
        ("signature", "300"),
    ])
});

/// DTP02
pub static DATE_TIME_PERIOD_FORMAT_QUALIFIER: LazyLock<CodeSet> = LazyLock::new(|| {
    CodeSet::new(
        "Date Time Period Format Qualifier",
        &[DATE_CCYYMMDD, DATE_RANGE_CCYYMMDD],
    )
    .with_aliases(&[("ccyymmdd", "D8"), ("single", "D8"), ("range", "RD8")])
});

/// Every shipped code set, forcing construction of each one
#[must_use]
pub fn all() -> Vec<&'static CodeSet> {
    vec![
        &*AUTHORIZATION_INFORMATION_QUALIFIER,
        &*SECURITY_INFORMATION_QUALIFIER,
        &*INTERCHANGE_ID_QUALIFIER,
        &*ACKNOWLEDGMENT_REQUESTED,
        &*USAGE_INDICATOR,
        &*FUNCTIONAL_IDENTIFIER_CODE,
        &*RESPONSIBLE_AGENCY_CODE,
        &*TRANSACTION_SET_IDENTIFIER_CODE,
        &*TRANSACTION_SET_PURPOSE_CODE,
        &*TIME_CODE,
        &*ACTION_CODE,
        &*ENTITY_IDENTIFIER_CODE,
        &*ENTITY_TYPE_QUALIFIER,
        &*IDENTIFICATION_CODE_QUALIFIER,
        &*REFERENCE_IDENTIFICATION_QUALIFIER,
        &*YES_NO_CONDITION,
        &*INDIVIDUAL_RELATIONSHIP_CODE,
        &*MAINTENANCE_TYPE_CODE,
        &*MAINTENANCE_REASON_CODE,
        &*BENEFIT_STATUS_CODE,
        &*EMPLOYMENT_STATUS_CODE,
        &*INSURANCE_LINE_CODE,
        &*COVERAGE_LEVEL_CODE,
        &*DATE_TIME_QUALIFIER,
        &*DATE_TIME_PERIOD_FORMAT_QUALIFIER,
    ]
}
