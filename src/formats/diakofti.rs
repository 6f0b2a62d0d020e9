//! Diakofti: villa plots on Kythira, bank export with uppercase Greek headers.

use super::{Columns, FormatSpec};
use crate::plots::ProjectSource;
use crate::rules::Cond::*;
use crate::rules::{Patch, Rule};

pub const PLOTS: &[&str] = &[
    "Y1", "Y2", "Y3", "Y6", "Y4-7", "Y8", "R2", "R4", "B5", "G2", "R5A", "R5B", "R5C", "R5D", "W2",
    "W8", "B6", "G1", "G12", "G13", "B9-10-11",
];

pub static SPEC: FormatSpec = FormatSpec {
    key: "diakofti",
    name: "Diakofti",
    columns: Columns {
        date: "ΗΜ/ΝΙΑ ΚΙΝΗΣΗΣ",
        description: "ΠΕΡΙΓΡΑΦΗ",
        amount: "ΠΟΣΟ",
    },
    project_header: "Plot",
    extra_columns: &["Balance"],
    projects: ProjectSource::PlotCodes {
        codes: PLOTS,
        fallback: "All Plots",
    },
    rules: RULES,
};

// Order matters: later matches overwrite earlier ones field by field.
const RULES: &[Rule] = &[
    Rule {
        name: "bank-fee",
        when: &[Any(&["ΠΡΟΜΗΘΕΙΑ", "COMMISSION", "ΕΞΟΔΑ", "CHARGES"]), AtMost(5.0)],
        set: Patch::new().category("Bank").supplier("Bank").label("Bank fees"),
    },
    Rule {
        name: "bank-maintenance",
        when: &[Any(&["ΣΥΝΔΡΟΜΗ ΛΟΓΑΡΙΑΣΜΟΥ", "ACCOUNT MAINTENANCE", "ΔΙΑΧΕΙΡΙΣΤΙΚΑ ΕΞΟΔΑ"])],
        set: Patch::new().category("Bank").supplier("Bank").label("Account maintenance"),
    },
    Rule {
        name: "bank-interest",
        when: &[Any(&["ΠΙΣΤΩΤΙΚΟΙ ΤΟΚΟΙ", "CREDIT INTEREST"]), Income],
        set: Patch::new().category("Bank").supplier("Bank").label("Interest"),
    },
    Rule {
        name: "food",
        when: &[Any(&[
            "DINNER", "LUNCH", "FOOD", "CAFE", "COFFEE", "RESTAURANT", "TAVERNA", "ΤΑΒΕΡΝΑ", "ΚΑΦΕ",
            "BAKERY", "ΦΟΥΡΝΟΣ", "SUPERMARKET", "ΣΟΥΠΕΡ ΜΑΡΚΕΤ",
        ])],
        set: Patch::new()
            .category("Project management")
            .supplier("General")
            .label("F&B"),
    },
    Rule {
        name: "mikel",
        when: &[Any(&["MIKEL"])],
        set: Patch::new().supplier("Mikel").label("Mikel Coffee"),
    },
    Rule {
        name: "everest",
        when: &[Any(&["EVEREST"])],
        set: Patch::new().supplier("Everest").label("Everest"),
    },
    Rule {
        name: "masoutis",
        when: &[Any(&["MASOUTIS", "ΜΑΣΟΥΤΗΣ"])],
        set: Patch::new().supplier("Masoutis").label("Supermarket"),
    },
    Rule {
        name: "taxi",
        when: &[Any(&["UBER", "TAXI", "ΤΑΞΙ", "FREENOW", "FREE NOW"])],
        set: Patch::new()
            .category("Project management")
            .supplier("Transportation")
            .label("Athens Taxi"),
    },
    Rule {
        name: "ferry",
        when: &[Any(&["TRIAINA", "ΤΡΙΑΙΝΑ", "ANEN LINES", "ΑΝΕΝ", "KYTHIRA LINES", "FERRY"])],
        set: Patch::new()
            .category("Project management")
            .supplier("Transportation")
            .label("Ferry tickets"),
    },
    Rule {
        name: "flights",
        when: &[Any(&["AEGEAN", "OLYMPIC AIR", "SKY EXPRESS"])],
        set: Patch::new()
            .category("Project management")
            .supplier("Transportation")
            .label("Flights"),
    },
    Rule {
        name: "fuel",
        when: &[Any(&["SHELL", "AVIN", "REVOIL", "ΚΑΥΣΙΜΑ", "FUEL"])],
        set: Patch::new()
            .category("Project management")
            .supplier("Transportation")
            .label("Fuel"),
    },
    Rule {
        name: "car-rental",
        when: &[Any(&["CAR RENTAL", "RENT A CAR", "ΕΝΟΙΚΙΑΣΗ ΑΥΤΟΚΙΝΗΤΟΥ"])],
        set: Patch::new()
            .category("Project management")
            .supplier("Transportation")
            .label("Car rental"),
    },
    Rule {
        name: "accommodation",
        when: &[Any(&["HOTEL", "ΞΕΝΟΔΟΧΕΙΟ", "ROOMS", "ΔΩΜΑΤΙΑ"]), Outcome],
        set: Patch::new()
            .category("Project management")
            .supplier("Accommodation")
            .label("Site team accommodation"),
    },
    Rule {
        name: "accounting",
        when: &[
            Any(&["ΛΟΓΙΣΤ", "ACCOUNTING", "ACCOUNTANT"]),
            Without(&["ARCHITECT", "ΑΡΧΙΤΕΚΤ"]),
        ],
        set: Patch::new()
            .category("Accounting")
            .supplier("Accountant")
            .label("Accounting services"),
    },
    Rule {
        name: "accounting-monthly",
        when: &[AmountIn(&[-1550.0, 1550.0, 2055.0, 2057.0])],
        set: Patch::new()
            .category("Accounting")
            .supplier("Accountant")
            .label("Monthly accounting fee"),
    },
    Rule {
        name: "architect",
        when: &[Any(&["ARCHITECT", "ΑΡΧΙΤΕΚΤ"])],
        set: Patch::new()
            .category("Design")
            .supplier("Architect")
            .label("Architectural services"),
    },
    Rule {
        name: "engineer",
        when: &[Any(&["ENGINEER", "ΜΗΧΑΝΙΚ"])],
        set: Patch::new()
            .category("Design")
            .supplier("Engineer")
            .label("Engineering studies"),
    },
    Rule {
        name: "legal",
        when: &[Any(&["LAWYER", "LEGAL", "ΔΙΚΗΓΟΡ", "NOTARY", "ΣΥΜΒΟΛΑΙΟΓΡΑΦ"])],
        set: Patch::new().category("Legal").supplier("Lawyer").label("Legal fees"),
    },
    Rule {
        name: "notary",
        when: &[Any(&["NOTARY", "ΣΥΜΒΟΛΑΙΟΓΡΑΦ"])],
        set: Patch::new().supplier("Notary").label("Notary fees"),
    },
    Rule {
        name: "google",
        when: &[Any(&["GOOGLE"])],
        set: Patch::new().category("Marketing").supplier("Google").label("Google Ads"),
    },
    Rule {
        name: "google-workspace",
        when: &[All(&["GOOGLE", "WORKSPACE"])],
        set: Patch::new().category("Software").label("Google Workspace"),
    },
    Rule {
        name: "meta",
        when: &[Any(&["FACEBK", "FACEBOOK", "META PLATFORMS", "INSTAGRAM"])],
        set: Patch::new().category("Marketing").supplier("Meta").label("Meta Ads"),
    },
    Rule {
        name: "software",
        when: &[Any(&["MICROSOFT", "ADOBE", "DROPBOX", "AUTODESK", "CANVA"])],
        set: Patch::new()
            .category("Software")
            .supplier("Software")
            .label("Software subscriptions"),
    },
    Rule {
        name: "telecom",
        when: &[Any(&["COSMOTE", "VODAFONE", "NOVA TELECOM", "WIND HELLAS"])],
        set: Patch::new()
            .category("Utilities")
            .supplier("Telecom")
            .label("Phone & internet"),
    },
    Rule {
        name: "electricity",
        when: &[Any(&["ΔΕΗ", "PPC", "ΗΡΩΝ ΕΝΕΡΓ", "HERON ENERGY"])],
        set: Patch::new()
            .category("Utilities")
            .supplier("Electricity")
            .label("Electricity"),
    },
    Rule {
        name: "water",
        when: &[Any(&["ΔΕΥΑ", "ΥΔΡΕΥΣΗ", "WATER SUPPLY"])],
        set: Patch::new().category("Utilities").supplier("Water").label("Water"),
    },
    Rule {
        name: "concrete",
        when: &[Any(&["CONCRETE", "ΣΚΥΡΟΔΕΜΑ", "ΜΠΕΤΟ"])],
        set: Patch::new()
            .expense("Hard Cost")
            .category("Construction")
            .supplier("Concrete")
            .label("Concrete supply"),
    },
    Rule {
        name: "building-materials",
        when: &[Any(&[
            "ΟΙΚΟΔΟΜΙΚΑ", "BUILDING MATERIALS", "PRAKTIKER", "LEROY MERLIN", "ΧΑΤΖΗΔΗΜΗΤΡΙΟΥ",
        ])],
        set: Patch::new()
            .expense("Hard Cost")
            .category("Construction")
            .supplier("Building materials")
            .label("Building materials"),
    },
    Rule {
        name: "contractor",
        when: &[Any(&["ΕΡΓΟΛΑΒ", "CONTRACTOR", "ΑΝΑΔΟΧ"])],
        set: Patch::new()
            .expense("Hard Cost")
            .category("Construction")
            .supplier("Contractor")
            .label("Contractor works"),
    },
    Rule {
        name: "electrician",
        when: &[Any(&["ELECTRICIAN", "ΗΛΕΚΤΡΟΛΟΓ"])],
        set: Patch::new()
            .expense("Hard Cost")
            .category("Construction")
            .supplier("Electrician")
            .label("Electrical works"),
    },
    Rule {
        name: "plumber",
        when: &[Any(&["PLUMBER", "ΥΔΡΑΥΛΙΚ"])],
        set: Patch::new()
            .expense("Hard Cost")
            .category("Construction")
            .supplier("Plumber")
            .label("Plumbing works"),
    },
    Rule {
        name: "pool",
        when: &[Any(&["POOL", "ΠΙΣΙΝ"])],
        set: Patch::new()
            .expense("Hard Cost")
            .category("Construction")
            .supplier("Pool contractor")
            .label("Pool works"),
    },
    Rule {
        name: "landscaping",
        when: &[Any(&["LANDSCAP", "GARDEN", "ΚΗΠΟΥΡ", "ΦΥΤΩΡΙ"])],
        set: Patch::new()
            .expense("Hard Cost")
            .category("Landscaping")
            .supplier("Landscaping")
            .label("Landscaping"),
    },
    Rule {
        name: "insurance",
        when: &[Any(&["INSURANCE", "ΑΣΦΑΛΙΣΤ", "INTERAMERICAN"])],
        set: Patch::new()
            .category("Insurance")
            .supplier("Insurer")
            .label("Insurance premium"),
    },
    // After insurance: "ΑΣΦΑΛΙΣΤΙΚΕΣ ΕΙΣΦΟΡΕΣ ΕΦΚΑ" is social security, not a policy.
    Rule {
        name: "efka",
        when: &[Any(&["ΕΦΚΑ", "EFKA", "ΕΙΣΦΟΡΕΣ"])],
        set: Patch::new()
            .category("Payroll")
            .supplier("EFKA")
            .label("Social security contributions"),
    },
    Rule {
        name: "payroll",
        when: &[Any(&["ΜΙΣΘΟΔΟΣΙΑ", "ΜΙΣΘΟΣ", "SALARY", "PAYROLL"])],
        set: Patch::new().category("Payroll").supplier("Staff").label("Salaries"),
    },
    Rule {
        name: "taxes",
        when: &[Any(&["ΑΑΔΕ", "AADE", "ΦΠΑ", "ΕΝΦΙΑ", "TAX OFFICE", "Δ.Ο.Υ."])],
        set: Patch::new()
            .category("Taxes & Permits")
            .supplier("Tax authority")
            .label("Taxes"),
    },
    Rule {
        name: "building-permit",
        when: &[Any(&["ΑΔΕΙΑ ΔΟΜΗΣΗΣ", "BUILDING PERMIT", "ΥΔΟΜ"])],
        set: Patch::new()
            .category("Taxes & Permits")
            .supplier("Building authority")
            .label("Building permit"),
    },
    Rule {
        name: "municipality",
        when: &[Any(&["ΔΗΜΟΣ ΚΥΘΗΡΩΝ", "DIMOS KYTHIRON", "MUNICIPALITY OF KYTHIRA"])],
        set: Patch::new()
            .category("Taxes & Permits")
            .supplier("Municipality of Kythira")
            .label("Municipal fees")
            .plot("All Plots"),
    },
    Rule {
        name: "airbnb",
        when: &[Any(&["AIRBNB"]), Income],
        set: Patch::new()
            .expense("Operation Income")
            .category("Rentals")
            .supplier("Airbnb")
            .label("Airbnb payout"),
    },
    Rule {
        name: "booking",
        when: &[Any(&["BOOKING.COM", "BOOKING BV"]), Income],
        set: Patch::new()
            .expense("Operation Income")
            .category("Rentals")
            .supplier("Booking.com")
            .label("Booking.com payout"),
    },
    Rule {
        name: "refund",
        when: &[Any(&["REFUND", "ΕΠΙΣΤΡΟΦΗ"]), Income],
        set: Patch::new().category("Refunds").label("Refund"),
    },
    Rule {
        name: "capital-injection",
        when: &[Any(&["ΚΑΤΑΘΕΣΗ", "DEPOSIT", "ΜΕΤΑΦΟΡΑ ΑΠΟ"]), Income, AtLeast(10_000.0)],
        set: Patch::new()
            .category("Funding")
            .supplier("Shareholders")
            .label("Capital injection")
            .plot("All Plots"),
    },
    // Fixed monthly fee; overrides any keyword rule above.
    Rule {
        name: "management-fee",
        when: &[Amount(-4960.0)],
        set: Patch::new()
            .expense("Soft Cost")
            .category("Management Fee")
            .supplier("Aiolos Management")
            .label("Monthly management fee")
            .plot("All Plots"),
    },
];
