//! Built-in locale data.

use super::Locale;

impl Locale {
    /// US English locale.
    pub fn en_us() -> Self {
        Locale {
            identifier: "en_US",
            am_string: "AM",
            pm_string: "PM",
            era_names_short: ["BC", "AD"],
            era_names_full: ["Before Christ", "Anno Domini"],
            month_names_short: [
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ],
            month_names_full: [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ],
            day_names_short: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            day_names_full: [
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ],
        }
    }

    /// British English locale.
    pub fn en_gb() -> Self {
        Locale {
            identifier: "en_GB",
            am_string: "am",
            pm_string: "pm",
            ..Self::en_us()
        }
    }

    /// French (France) locale.
    pub fn fr_fr() -> Self {
        Locale {
            identifier: "fr_FR",
            am_string: "AM",
            pm_string: "PM",
            era_names_short: ["av. J.-C.", "ap. J.-C."],
            era_names_full: ["avant Jésus-Christ", "après Jésus-Christ"],
            month_names_short: [
                "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.",
                "nov.", "déc.",
            ],
            month_names_full: [
                "janvier",
                "février",
                "mars",
                "avril",
                "mai",
                "juin",
                "juillet",
                "août",
                "septembre",
                "octobre",
                "novembre",
                "décembre",
            ],
            day_names_short: ["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."],
            day_names_full: [
                "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
            ],
        }
    }

    /// German (Germany) locale.
    pub fn de_de() -> Self {
        Locale {
            identifier: "de_DE",
            am_string: "AM",
            pm_string: "PM",
            era_names_short: ["v. Chr.", "n. Chr."],
            era_names_full: ["vor Christus", "nach Christus"],
            month_names_short: [
                "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.",
                "Nov.", "Dez.",
            ],
            month_names_full: [
                "Januar",
                "Februar",
                "März",
                "April",
                "Mai",
                "Juni",
                "Juli",
                "August",
                "September",
                "Oktober",
                "November",
                "Dezember",
            ],
            day_names_short: ["So.", "Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa."],
            day_names_full: [
                "Sonntag",
                "Montag",
                "Dienstag",
                "Mittwoch",
                "Donnerstag",
                "Freitag",
                "Samstag",
            ],
        }
    }
}
