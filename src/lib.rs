pub mod configuration;

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod time {
    pub mod dateerror;
    pub mod utility;
    pub mod period;
    pub mod easter;
    pub mod workday;
    pub mod deadline;
    pub mod deadlinerulemanager;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod fixeddateholiday;
        pub mod easterrelatedholiday;
    }

    pub mod calendar {
        pub mod holidaycalendar;
        pub mod simplecalendar;
        pub mod cachedcalendar;
        pub mod france;
        pub mod holidaycalendarmanager;
    }
}
