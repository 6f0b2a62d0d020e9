//! Athens: head-office account, projects named after the town they are in.

use super::{Columns, FormatSpec};
use crate::plots::ProjectSource;
use crate::rules::Cond::*;
use crate::rules::{Patch, Rule};

const TOWNS: &[(&[&str], &str)] = &[
    (&["KIFISIA", "ΚΗΦΙΣΙΑ"], "Kifisia"),
    (&["MAROUSI", "ΜΑΡΟΥΣΙ"], "Marousi"),
    (&["GLYFADA", "ΓΛΥΦΑΔΑ"], "Glyfada"),
    (&["VOULA", "ΒΟΥΛΑ"], "Voula"),
    (&["ILISIA", "ΙΛΙΣΙΑ"], "Ilisia"),
    (&["KYTHIRA", "ΚΥΘΗΡΑ", "DIAKOFTI", "ΔΙΑΚΟΦΤΙ"], "Diakofti"),
];

pub static SPEC: FormatSpec = FormatSpec {
    key: "athens",
    name: "Athens",
    columns: Columns {
        date: "Ημερομηνία",
        description: "Περιγραφή",
        amount: "Ποσό συναλλαγής",
    },
    project_header: "Project",
    extra_columns: &["Payment Details"],
    projects: ProjectSource::Keywords {
        table: TOWNS,
        fallback: "All Projects",
    },
    rules: RULES,
};

const RULES: &[Rule] = &[
    Rule {
        name: "bank-fee",
        when: &[Any(&["ΠΡΟΜΗΘΕΙΑ", "ΕΞΟΔΑ", "COMMISSION", "FEE"]), AtMost(5.0)],
        set: Patch::new().category("Bank").supplier("Bank").label("Bank fees"),
    },
    Rule {
        name: "bank-maintenance",
        when: &[Any(&["ΣΥΝΔΡΟΜΗ ΛΟΓΑΡΙΑΣΜΟΥ", "ΔΙΑΧΕΙΡΙΣΤΙΚΑ ΕΞΟΔΑ"])],
        set: Patch::new().category("Bank").supplier("Bank").label("Account maintenance"),
    },
    Rule {
        name: "food",
        when: &[Any(&[
            "DINNER", "LUNCH", "FOOD", "CAFE", "COFFEE", "RESTAURANT", "ΕΣΤΙΑΤΟΡΙΟ", "ΚΑΦΕ", "BAKERY",
        ])],
        set: Patch::new()
            .category("Office")
            .supplier("General")
            .label("F&B"),
    },
    Rule {
        name: "mikel",
        when: &[Any(&["MIKEL"])],
        set: Patch::new().supplier("Mikel").label("Mikel Coffee"),
    },
    Rule {
        name: "efood",
        when: &[Any(&["EFOOD", "WOLT", "BOX.GR"])],
        set: Patch::new().supplier("Delivery").label("Office lunch delivery"),
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
        name: "fuel",
        when: &[Any(&["SHELL", "AVIN", "REVOIL", "ΚΑΥΣΙΜΑ", "FUEL"])],
        set: Patch::new()
            .category("Project management")
            .supplier("Transportation")
            .label("Fuel"),
    },
    Rule {
        name: "parking",
        when: &[Any(&["PARKING", "ΣΤΑΘΜΕΥΣΗ", "ΔΙΟΔΙΑ", "ATTIKI ODOS", "ΑΤΤΙΚΗ ΟΔΟΣ"])],
        set: Patch::new()
            .category("Project management")
            .supplier("Transportation")
            .label("Parking & tolls"),
    },
    Rule {
        name: "office-rent",
        when: &[Any(&["ΕΝΟΙΚΙΟ ΓΡΑΦΕΙΟΥ", "OFFICE RENT"]), Outcome],
        set: Patch::new().category("Office").supplier("Landlord").label("Office rent"),
    },
    Rule {
        name: "courier",
        when: &[Any(&["ACS COURIER", "ΓΕΝΙΚΗ ΤΑΧΥΔΡΟΜΙΚΗ", "ELTA COURIER", "DHL"])],
        set: Patch::new().category("Office").supplier("Courier").label("Courier"),
    },
    Rule {
        name: "printing",
        when: &[Any(&["PRINT", "ΕΚΤΥΠΩΣ", "PLAISIO", "ΠΛΑΙΣΙΟ"])],
        set: Patch::new().category("Office").supplier("Office supplies").label("Printing & supplies"),
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
        name: "architect",
        when: &[Any(&["ARCHITECT", "ΑΡΧΙΤΕΚΤ"])],
        set: Patch::new()
            .category("Design")
            .supplier("Architect")
            .label("Architectural services"),
    },
    Rule {
        name: "legal",
        when: &[Any(&["LAWYER", "LEGAL", "ΔΙΚΗΓΟΡ"])],
        set: Patch::new().category("Legal").supplier("Lawyer").label("Legal fees"),
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
        name: "linkedin",
        when: &[Any(&["LINKEDIN"])],
        set: Patch::new().category("Marketing").supplier("LinkedIn").label("LinkedIn"),
    },
    Rule {
        name: "advertising",
        when: &[Any(&["ΔΙΑΦΗΜΙΣ", "ADVERTISING"])],
        set: Patch::new().category("Marketing").supplier("Agency").label("Advertising"),
    },
    Rule {
        name: "software",
        when: &[Any(&["MICROSOFT", "ADOBE", "DROPBOX", "AUTODESK", "CANVA", "OPENAI"])],
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
        name: "client-invoice",
        when: &[Any(&["ΤΙΜΟΛΟΓΙΟ", "INVOICE", "ΕΞΟΦΛΗΣΗ"]), Income],
        set: Patch::new()
            .expense("Operation Income")
            .category("Sales")
            .supplier("Client")
            .label("Client invoice payment"),
    },
    Rule {
        name: "client-advance",
        when: &[Any(&["ΠΡΟΚΑΤΑΒΟΛΗ", "ADVANCE"]), Income],
        set: Patch::new()
            .expense("Operation Income")
            .category("Sales")
            .supplier("Client")
            .label("Client advance"),
    },
    Rule {
        name: "intercompany",
        when: &[Any(&["ΜΕΤΑΦΟΡΑ ΣΕ", "ΜΕΤΑΦΟΡΑ ΑΠΟ", "INTERNAL TRANSFER"])],
        set: Patch::new()
            .category("Intercompany")
            .supplier("Aiolos")
            .label("Transfer between accounts"),
    },
    // Fixed fee charged to the Diakofti development.
    Rule {
        name: "management-fee",
        when: &[Amount(4960.0)],
        set: Patch::new()
            .expense("Operation Income")
            .category("Management Fee")
            .supplier("Diakofti Development")
            .label("Management fee received")
            .plot("Diakofti"),
    },
];
