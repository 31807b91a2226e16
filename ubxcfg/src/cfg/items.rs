//! Catalog of known configuration items, derived from the u-blox 9 (M9/F9
//! series) interface descriptions. The `CFG-UBLOXCFGTEST` group does not
//! exist on any receiver and is used by the test suite only.

use super::{CfgConst, CfgItem, CfgType, MsgRate};

macro_rules! opt_str {
    () => {
        ""
    };
    ($v:literal) => {
        $v
    };
}

macro_rules! opt_factor {
    () => {
        1.0
    };
    ($v:literal) => {
        $v
    };
}

macro_rules! opt_consts {
    () => {
        &[]
    };
    ($v:expr) => {
        $v
    };
}

macro_rules! cfg_consts {
    ($( ($name:literal, $value:literal, $num:expr) ),* $(,)?) => {
        &[ $( CfgConst { name: $name, value: $value, num: $num } ),* ]
    };
}

macro_rules! cfg_items {
    (
        $(
            $name:literal, $id:literal, $ty:ident, $title:literal
            $(, scale = $scale:literal / $factor:literal)?
            $(, unit = $unit:literal)?
            $(, consts = $consts:expr)?
            ;
        )*
    ) => {
        /// All configuration items, one entry per id.
        pub static ALL_ITEMS: &[CfgItem] = &[
            $(
                CfgItem {
                    id: $id,
                    ty: CfgType::$ty,
                    name: $name,
                    title: $title,
                    unit: opt_str!($($unit)?),
                    scale: opt_str!($($scale)?),
                    scale_factor: opt_factor!($($factor)?),
                    consts: opt_consts!($($consts)?),
                },
            )*
        ];
    };
}

static STOPBITS_CONSTS: &[CfgConst] = cfg_consts![
    ("HALF", "0", 0),
    ("ONE", "1", 1),
    ("ONEHALF", "2", 2),
    ("TWO", "3", 3),
];

static DATABITS_CONSTS: &[CfgConst] = cfg_consts![("EIGHT", "0", 0), ("SEVEN", "1", 1)];

static PARITY_CONSTS: &[CfgConst] =
    cfg_consts![("NONE", "0", 0), ("ODD", "1", 1), ("EVEN", "2", 2)];

static TIMEREF_CONSTS: &[CfgConst] = cfg_consts![
    ("UTC", "0", 0),
    ("GPS", "1", 1),
    ("GLO", "2", 2),
    ("BDS", "3", 3),
    ("GAL", "4", 4),
];

static INFMSG_CONSTS: &[CfgConst] = cfg_consts![
    ("ERROR", "0x01", 0x01),
    ("WARNING", "0x02", 0x02),
    ("NOTICE", "0x04", 0x04),
    ("TEST", "0x08", 0x08),
    ("DEBUG", "0x10", 0x10),
];

static FIXMODE_CONSTS: &[CfgConst] =
    cfg_consts![("2DONLY", "1", 1), ("3DONLY", "2", 2), ("AUTO", "3", 3)];

static DYNMODEL_CONSTS: &[CfgConst] = cfg_consts![
    ("PORT", "0", 0),
    ("STAT", "2", 2),
    ("PED", "3", 3),
    ("AUTOMOT", "4", 4),
    ("SEA", "5", 5),
    ("AIR1", "6", 6),
    ("AIR2", "7", 7),
    ("AIR4", "8", 8),
    ("WRIST", "9", 9),
    ("BIKE", "10", 10),
];

static UTCSTANDARD_CONSTS: &[CfgConst] = cfg_consts![
    ("AUTO", "0", 0),
    ("USNO", "3", 3),
    ("EU", "5", 5),
    ("SU", "6", 6),
    ("NTSC", "7", 7),
];

static TPPULSE_CONSTS: &[CfgConst] = cfg_consts![("PERIOD", "0", 0), ("FREQ", "1", 1)];

static TPPULSELENGTH_CONSTS: &[CfgConst] = cfg_consts![("RATIO", "0", 0), ("LENGTH", "1", 1)];

static TMODE_MODE_CONSTS: &[CfgConst] =
    cfg_consts![("DISABLED", "0", 0), ("SURVEY_IN", "1", 1), ("FIXED", "2", 2)];

static TMODE_POSTYPE_CONSTS: &[CfgConst] = cfg_consts![("ECEF", "0", 0), ("LLH", "1", 1)];

static DGNSSMODE_CONSTS: &[CfgConst] =
    cfg_consts![("RTK_FLOAT", "2", 2), ("RTK_FIXED", "3", 3)];

static ODO_PROFILE_CONSTS: &[CfgConst] = cfg_consts![
    ("RUN", "0", 0),
    ("CYCL", "1", 1),
    ("SWIM", "2", 2),
    ("CAR", "3", 3),
    ("CUSTOM", "4", 4),
];

static ITFM_ANTSETTING_CONSTS: &[CfgConst] =
    cfg_consts![("UNKNOWN", "0", 0), ("PASSIVE", "1", 1), ("ACTIVE", "2", 2)];

static TEST_X1_CONSTS: &[CfgConst] = cfg_consts![
    ("FIRST", "0x01", 0x01),
    ("SECOND", "0x02", 0x02),
    ("LAST", "0x80", 0x80),
];

static TEST_X8_CONSTS: &[CfgConst] = cfg_consts![
    ("BIT0", "0x0000000000000001", 0x01),
    ("BIT31", "0x0000000080000000", 0x80000000),
    ("BIT63", "0x8000000000000000", i64::MIN),
];

static TEST_E1_CONSTS: &[CfgConst] =
    cfg_consts![("ONE", "1", 1), ("TWO", "2", 2), ("THREE", "3", 3)];

static TEST_E2_CONSTS: &[CfgConst] = cfg_consts![
    ("MINUS_ONE", "-1", -1),
    ("NOUGHT", "0", 0),
    ("PLUS_ONE", "1", 1),
];

static TEST_E4_CONSTS: &[CfgConst] = cfg_consts![
    ("MINUS_FOUR", "-4", -4),
    ("FOUR_HEX", "4", 4),
    ("LARGE", "2000000000", 2000000000),
];

cfg_items! {
    // CFG-I2C: I2C interface configuration
    "CFG-I2C-ADDRESS", 0x20510001, U1, "I2C slave address of the receiver";
    "CFG-I2C-EXTENDEDTIMEOUT", 0x10510002, L, "Flag to disable timeouting the interface after 1.5 s";
    "CFG-I2C-ENABLED", 0x10510003, L, "Flag to indicate if the I2C interface should be enabled";

    // CFG-I2CINPROT: Input protocol configuration of the I2C interface
    "CFG-I2CINPROT-UBX", 0x10710001, L, "Flag to indicate if UBX should be an input protocol on I2C";
    "CFG-I2CINPROT-NMEA", 0x10710002, L, "Flag to indicate if NMEA should be an input protocol on I2C";
    "CFG-I2CINPROT-RTCM3X", 0x10710004, L, "Flag to indicate if RTCM3X should be an input protocol on I2C";

    // CFG-I2COUTPROT: Output protocol configuration of the I2C interface
    "CFG-I2COUTPROT-UBX", 0x10720001, L, "Flag to indicate if UBX should be an output protocol on I2C";
    "CFG-I2COUTPROT-NMEA", 0x10720002, L, "Flag to indicate if NMEA should be an output protocol on I2C";
    "CFG-I2COUTPROT-RTCM3X", 0x10720004, L, "Flag to indicate if RTCM3X should be an output protocol on I2C";

    // CFG-UART1: Configuration of the UART1 interface
    "CFG-UART1-BAUDRATE", 0x40520001, U4, "The baud rate that should be configured on the UART1";
    "CFG-UART1-STOPBITS", 0x20520002, E1, "Number of stopbits that should be used on UART1", consts = STOPBITS_CONSTS;
    "CFG-UART1-DATABITS", 0x20520003, E1, "Number of databits that should be used on UART1", consts = DATABITS_CONSTS;
    "CFG-UART1-PARITY", 0x20520004, E1, "Parity mode that should be used on UART1", consts = PARITY_CONSTS;
    "CFG-UART1-ENABLED", 0x10520005, L, "Flag to indicate if the UART1 should be enabled";

    // CFG-UART1INPROT: Input protocol configuration of the UART1 interface
    "CFG-UART1INPROT-UBX", 0x10730001, L, "Flag to indicate if UBX should be an input protocol on UART1";
    "CFG-UART1INPROT-NMEA", 0x10730002, L, "Flag to indicate if NMEA should be an input protocol on UART1";
    "CFG-UART1INPROT-RTCM3X", 0x10730004, L, "Flag to indicate if RTCM3X should be an input protocol on UART1";

    // CFG-UART1OUTPROT: Output protocol configuration of the UART1 interface
    "CFG-UART1OUTPROT-UBX", 0x10740001, L, "Flag to indicate if UBX should be an output protocol on UART1";
    "CFG-UART1OUTPROT-NMEA", 0x10740002, L, "Flag to indicate if NMEA should be an output protocol on UART1";
    "CFG-UART1OUTPROT-RTCM3X", 0x10740004, L, "Flag to indicate if RTCM3X should be an output protocol on UART1";

    // CFG-UART2: Configuration of the UART2 interface
    "CFG-UART2-BAUDRATE", 0x40530001, U4, "The baud rate that should be configured on the UART2";
    "CFG-UART2-STOPBITS", 0x20530002, E1, "Number of stopbits that should be used on UART2", consts = STOPBITS_CONSTS;
    "CFG-UART2-DATABITS", 0x20530003, E1, "Number of databits that should be used on UART2", consts = DATABITS_CONSTS;
    "CFG-UART2-PARITY", 0x20530004, E1, "Parity mode that should be used on UART2", consts = PARITY_CONSTS;
    "CFG-UART2-ENABLED", 0x10530005, L, "Flag to indicate if the UART2 should be enabled";
    "CFG-UART2-REMAP", 0x10530006, L, "UART2 remapping";

    // CFG-UART2INPROT: Input protocol configuration of the UART2 interface
    "CFG-UART2INPROT-UBX", 0x10750001, L, "Flag to indicate if UBX should be an input protocol on UART2";
    "CFG-UART2INPROT-NMEA", 0x10750002, L, "Flag to indicate if NMEA should be an input protocol on UART2";
    "CFG-UART2INPROT-RTCM3X", 0x10750004, L, "Flag to indicate if RTCM3X should be an input protocol on UART2";

    // CFG-UART2OUTPROT: Output protocol configuration of the UART2 interface
    "CFG-UART2OUTPROT-UBX", 0x10760001, L, "Flag to indicate if UBX should be an output protocol on UART2";
    "CFG-UART2OUTPROT-NMEA", 0x10760002, L, "Flag to indicate if NMEA should be an output protocol on UART2";
    "CFG-UART2OUTPROT-RTCM3X", 0x10760004, L, "Flag to indicate if RTCM3X should be an output protocol on UART2";

    // CFG-USB: Configuration of the USB interface
    "CFG-USB-ENABLED", 0x10650001, L, "Flag to indicate if the USB interface should be enabled";
    "CFG-USB-SELFPOW", 0x10650002, L, "Self-powered device";
    "CFG-USB-VENDOR_ID", 0x3065000a, U2, "Vendor ID";
    "CFG-USB-PRODUCT_ID", 0x3065000b, U2, "Product ID";
    "CFG-USB-POWER", 0x3065000c, U2, "Power consumption", unit = "mA";
    "CFG-USB-VENDOR_STR0", 0x5065000d, X8, "Vendor string characters 0-7";
    "CFG-USB-VENDOR_STR1", 0x5065000e, X8, "Vendor string characters 8-15";
    "CFG-USB-VENDOR_STR2", 0x5065000f, X8, "Vendor string characters 16-23";
    "CFG-USB-VENDOR_STR3", 0x50650010, X8, "Vendor string characters 24-31";
    "CFG-USB-PRODUCT_STR0", 0x50650011, X8, "Product string characters 0-7";
    "CFG-USB-PRODUCT_STR1", 0x50650012, X8, "Product string characters 8-15";
    "CFG-USB-PRODUCT_STR2", 0x50650013, X8, "Product string characters 16-23";
    "CFG-USB-PRODUCT_STR3", 0x50650014, X8, "Product string characters 24-31";
    "CFG-USB-SERIAL_NO_STR0", 0x50650015, X8, "Serial number string characters 0-7";
    "CFG-USB-SERIAL_NO_STR1", 0x50650016, X8, "Serial number string characters 8-15";
    "CFG-USB-SERIAL_NO_STR2", 0x50650017, X8, "Serial number string characters 16-23";
    "CFG-USB-SERIAL_NO_STR3", 0x50650018, X8, "Serial number string characters 24-31";

    // CFG-USBINPROT: Input protocol configuration of the USB interface
    "CFG-USBINPROT-UBX", 0x10770001, L, "Flag to indicate if UBX should be an input protocol on USB";
    "CFG-USBINPROT-NMEA", 0x10770002, L, "Flag to indicate if NMEA should be an input protocol on USB";
    "CFG-USBINPROT-RTCM3X", 0x10770004, L, "Flag to indicate if RTCM3X should be an input protocol on USB";

    // CFG-USBOUTPROT: Output protocol configuration of the USB interface
    "CFG-USBOUTPROT-UBX", 0x10780001, L, "Flag to indicate if UBX should be an output protocol on USB";
    "CFG-USBOUTPROT-NMEA", 0x10780002, L, "Flag to indicate if NMEA should be an output protocol on USB";
    "CFG-USBOUTPROT-RTCM3X", 0x10780004, L, "Flag to indicate if RTCM3X should be an output protocol on USB";

    // CFG-SPI: Configuration of the SPI interface
    "CFG-SPI-MAXFF", 0x20640001, U1, "Number of 0xFF bytes to mark end of transmission";
    "CFG-SPI-CPOLARITY", 0x10640002, L, "Clock polarity select";
    "CFG-SPI-CPHASE", 0x10640003, L, "Clock phase select";
    "CFG-SPI-EXTENDEDTIMEOUT", 0x10640005, L, "Flag to disable timeouting the interface after 1.5 s";
    "CFG-SPI-ENABLED", 0x10640006, L, "Flag to indicate if the SPI interface should be enabled";

    // CFG-SPIINPROT: Input protocol configuration of the SPI interface
    "CFG-SPIINPROT-UBX", 0x10790001, L, "Flag to indicate if UBX should be an input protocol on SPI";
    "CFG-SPIINPROT-NMEA", 0x10790002, L, "Flag to indicate if NMEA should be an input protocol on SPI";
    "CFG-SPIINPROT-RTCM3X", 0x10790004, L, "Flag to indicate if RTCM3X should be an input protocol on SPI";

    // CFG-SPIOUTPROT: Output protocol configuration of the SPI interface
    "CFG-SPIOUTPROT-UBX", 0x107a0001, L, "Flag to indicate if UBX should be an output protocol on SPI";
    "CFG-SPIOUTPROT-NMEA", 0x107a0002, L, "Flag to indicate if NMEA should be an output protocol on SPI";
    "CFG-SPIOUTPROT-RTCM3X", 0x107a0004, L, "Flag to indicate if RTCM3X should be an output protocol on SPI";

    // CFG-RATE: Navigation and measurement rate configuration
    "CFG-RATE-MEAS", 0x30210001, U2, "Nominal time between GNSS measurements", scale = "0.001" / 0.001, unit = "s";
    "CFG-RATE-NAV", 0x30210002, U2, "Ratio of number of measurements to number of navigation solutions";
    "CFG-RATE-TIMEREF", 0x20210003, E1, "Time system to which measurements are aligned", consts = TIMEREF_CONSTS;

    // CFG-INFMSG: Information message configuration
    "CFG-INFMSG-UBX_I2C", 0x20920001, X1, "Information message enable flags for the UBX protocol on the I2C interface", consts = INFMSG_CONSTS;
    "CFG-INFMSG-UBX_UART1", 0x20920002, X1, "Information message enable flags for the UBX protocol on the UART1 interface", consts = INFMSG_CONSTS;
    "CFG-INFMSG-UBX_UART2", 0x20920003, X1, "Information message enable flags for the UBX protocol on the UART2 interface", consts = INFMSG_CONSTS;
    "CFG-INFMSG-UBX_USB", 0x20920004, X1, "Information message enable flags for the UBX protocol on the USB interface", consts = INFMSG_CONSTS;
    "CFG-INFMSG-UBX_SPI", 0x20920005, X1, "Information message enable flags for the UBX protocol on the SPI interface", consts = INFMSG_CONSTS;
    "CFG-INFMSG-NMEA_I2C", 0x20920006, X1, "Information message enable flags for the NMEA protocol on the I2C interface", consts = INFMSG_CONSTS;
    "CFG-INFMSG-NMEA_UART1", 0x20920007, X1, "Information message enable flags for the NMEA protocol on the UART1 interface", consts = INFMSG_CONSTS;
    "CFG-INFMSG-NMEA_UART2", 0x20920008, X1, "Information message enable flags for the NMEA protocol on the UART2 interface", consts = INFMSG_CONSTS;
    "CFG-INFMSG-NMEA_USB", 0x20920009, X1, "Information message enable flags for the NMEA protocol on the USB interface", consts = INFMSG_CONSTS;
    "CFG-INFMSG-NMEA_SPI", 0x2092000a, X1, "Information message enable flags for the NMEA protocol on the SPI interface", consts = INFMSG_CONSTS;

    // CFG-NAVSPG: Standard precision navigation configuration
    "CFG-NAVSPG-FIXMODE", 0x20110011, E1, "Position fix mode", consts = FIXMODE_CONSTS;
    "CFG-NAVSPG-INIFIX3D", 0x10110013, L, "Initial fix must be a 3D fix";
    "CFG-NAVSPG-WKNROLLOVER", 0x30110017, U2, "GPS week rollover number";
    "CFG-NAVSPG-USE_PPP", 0x10110019, L, "Use Precise Point Positioning";
    "CFG-NAVSPG-UTCSTANDARD", 0x2011001c, E1, "UTC standard to be used", consts = UTCSTANDARD_CONSTS;
    "CFG-NAVSPG-DYNMODEL", 0x20110021, E1, "Dynamic platform model", consts = DYNMODEL_CONSTS;
    "CFG-NAVSPG-ACKAIDING", 0x10110025, L, "Acknowledge assistance input messages";
    "CFG-NAVSPG-USE_USRDAT", 0x10110061, L, "Use user geodetic datum parameters";
    "CFG-NAVSPG-USRDAT_MAJA", 0x50110062, R8, "Geodetic datum semi-major axis", unit = "m";
    "CFG-NAVSPG-USRDAT_FLAT", 0x50110063, R8, "Geodetic datum 1.0 / flattening";
    "CFG-NAVSPG-USRDAT_DX", 0x40110064, R4, "Geodetic datum X axis shift at the origin", unit = "m";
    "CFG-NAVSPG-USRDAT_DY", 0x40110065, R4, "Geodetic datum Y axis shift at the origin", unit = "m";
    "CFG-NAVSPG-USRDAT_DZ", 0x40110066, R4, "Geodetic datum Z axis shift at the origin", unit = "m";
    "CFG-NAVSPG-USRDAT_ROTX", 0x40110067, R4, "Geodetic datum rotation about the X axis", unit = "arcsec";
    "CFG-NAVSPG-USRDAT_ROTY", 0x40110068, R4, "Geodetic datum rotation about the Y axis", unit = "arcsec";
    "CFG-NAVSPG-USRDAT_ROTZ", 0x40110069, R4, "Geodetic datum rotation about the Z axis", unit = "arcsec";
    "CFG-NAVSPG-USRDAT_SCALE", 0x4011006a, R4, "Geodetic datum scale factor", unit = "ppm";
    "CFG-NAVSPG-INFIL_MINSVS", 0x201100a1, U1, "Minimum number of satellites for navigation";
    "CFG-NAVSPG-INFIL_MAXSVS", 0x201100a2, U1, "Maximum number of satellites for navigation";
    "CFG-NAVSPG-INFIL_MINCNO", 0x201100a3, U1, "Minimum satellite signal level for navigation", unit = "dBHz";
    "CFG-NAVSPG-INFIL_MINELEV", 0x201100a4, I1, "Minimum elevation for a GNSS satellite to be used in navigation", unit = "deg";
    "CFG-NAVSPG-INFIL_NCNOTHRS", 0x201100aa, U1, "Number of satellites required to have C/N0 above CFG-NAVSPG-INFIL_CNOTHRS for a fix to be attempted";
    "CFG-NAVSPG-INFIL_CNOTHRS", 0x201100ab, U1, "C/N0 threshold for deciding whether to attempt a fix", unit = "dBHz";
    "CFG-NAVSPG-OUTFIL_PDOP", 0x301100b1, U2, "Output filter position DOP mask (threshold)", scale = "0.1" / 0.1;
    "CFG-NAVSPG-OUTFIL_TDOP", 0x301100b2, U2, "Output filter time DOP mask (threshold)", scale = "0.1" / 0.1;
    "CFG-NAVSPG-OUTFIL_PACC", 0x301100b3, U2, "Output filter position accuracy mask (threshold)", unit = "m";
    "CFG-NAVSPG-OUTFIL_TACC", 0x301100b4, U2, "Output filter time accuracy mask (threshold)", unit = "m";
    "CFG-NAVSPG-OUTFIL_FACC", 0x301100b5, U2, "Output filter frequency accuracy mask (threshold)", scale = "0.01" / 0.01, unit = "m/s";
    "CFG-NAVSPG-CONSTR_ALT", 0x401100c1, I4, "Fixed altitude (mean sea level) for 2D fix mode", scale = "0.01" / 0.01, unit = "m";
    "CFG-NAVSPG-CONSTR_ALTVAR", 0x401100c2, U4, "Fixed altitude variance for 2D mode", scale = "0.0001" / 0.0001, unit = "m^2";
    "CFG-NAVSPG-CONSTR_DGNSSTO", 0x201100c4, U1, "DGNSS timeout", unit = "s";

    // CFG-NAVHPG: High precision navigation configuration
    "CFG-NAVHPG-DGNSSMODE", 0x20140011, E1, "Differential corrections mode", consts = DGNSSMODE_CONSTS;

    // CFG-SBAS: SBAS configuration
    "CFG-SBAS-USE_TESTMODE", 0x10360002, L, "Use SBAS data when it is in test mode";
    "CFG-SBAS-USE_RANGING", 0x10360003, L, "Use SBAS GEOs as a ranging source (for navigation)";
    "CFG-SBAS-USE_DIFFCORR", 0x10360004, L, "Use SBAS differential corrections";
    "CFG-SBAS-USE_INTEGRITY", 0x10360005, L, "Use SBAS integrity information";
    "CFG-SBAS-PRNSCANMASK", 0x50360006, X8, "SBAS PRN search configuration";

    // CFG-SIGNAL: Satellite systems (GNSS) signal configuration
    "CFG-SIGNAL-GPS_ENA", 0x1031001f, L, "GPS enable";
    "CFG-SIGNAL-GPS_L1CA_ENA", 0x10310001, L, "GPS L1C/A";
    "CFG-SIGNAL-GPS_L2C_ENA", 0x10310003, L, "GPS L2C";
    "CFG-SIGNAL-GAL_ENA", 0x10310021, L, "Galileo enable";
    "CFG-SIGNAL-GAL_E1_ENA", 0x10310007, L, "Galileo E1";
    "CFG-SIGNAL-GAL_E5B_ENA", 0x1031000a, L, "Galileo E5b";
    "CFG-SIGNAL-BDS_ENA", 0x10310022, L, "BeiDou enable";
    "CFG-SIGNAL-BDS_B1_ENA", 0x1031000d, L, "BeiDou B1I";
    "CFG-SIGNAL-BDS_B2_ENA", 0x1031000e, L, "BeiDou B2I";
    "CFG-SIGNAL-QZSS_ENA", 0x10310024, L, "QZSS enable";
    "CFG-SIGNAL-QZSS_L1CA_ENA", 0x10310012, L, "QZSS L1C/A";
    "CFG-SIGNAL-QZSS_L2C_ENA", 0x10310015, L, "QZSS L2C";
    "CFG-SIGNAL-GLO_ENA", 0x10310025, L, "GLONASS enable";
    "CFG-SIGNAL-GLO_L1_ENA", 0x10310018, L, "GLONASS L1";
    "CFG-SIGNAL-GLO_L2_ENA", 0x1031001a, L, "GLONASS L2";

    // CFG-TP: Time pulse configuration
    "CFG-TP-PULSE_DEF", 0x20050023, E1, "Determines whether the time pulse is interpreted as frequency or period", consts = TPPULSE_CONSTS;
    "CFG-TP-PULSE_LENGTH_DEF", 0x20050030, E1, "Determines whether the time pulse length is interpreted as length or pulse ratio", consts = TPPULSELENGTH_CONSTS;
    "CFG-TP-ANT_CABLEDELAY", 0x30050001, I2, "Antenna cable delay", scale = "1e-9" / 1e-9, unit = "s";
    "CFG-TP-PERIOD_TP1", 0x40050002, U4, "Time pulse period (TP1)", scale = "1e-6" / 1e-6, unit = "s";
    "CFG-TP-PERIOD_LOCK_TP1", 0x40050003, U4, "Time pulse period when locked to GNSS time (TP1)", scale = "1e-6" / 1e-6, unit = "s";
    "CFG-TP-FREQ_TP1", 0x40050024, U4, "Time pulse frequency (TP1)", unit = "Hz";
    "CFG-TP-FREQ_LOCK_TP1", 0x40050025, U4, "Time pulse frequency when locked to GNSS time (TP1)", unit = "Hz";
    "CFG-TP-LEN_TP1", 0x40050004, U4, "Time pulse length (TP1)", scale = "1e-6" / 1e-6, unit = "s";
    "CFG-TP-LEN_LOCK_TP1", 0x40050005, U4, "Time pulse length when locked to GNSS time (TP1)", scale = "1e-6" / 1e-6, unit = "s";
    "CFG-TP-TP1_ENA", 0x10050007, L, "Enable the first timepulse";
    "CFG-TP-SYNC_GNSS_TP1", 0x10050008, L, "Sync time pulse to GNSS time or local clock (TP1)";
    "CFG-TP-USE_LOCKED_TP1", 0x10050009, L, "Use locked parameters when possible (TP1)";
    "CFG-TP-ALIGN_TO_TOW_TP1", 0x1005000a, L, "Align time pulse to top of second (TP1)";
    "CFG-TP-POL_TP1", 0x1005000b, L, "Set time pulse polarity (TP1)";
    "CFG-TP-TIMEGRID_TP1", 0x2005000c, E1, "Time grid to use (TP1)", consts = TIMEREF_CONSTS;

    // CFG-TMODE: Time mode configuration
    "CFG-TMODE-MODE", 0x20030001, E1, "Receiver mode", consts = TMODE_MODE_CONSTS;
    "CFG-TMODE-POS_TYPE", 0x20030002, E1, "Determines whether the ARP position is given in ECEF or LAT/LON/HEIGHT", consts = TMODE_POSTYPE_CONSTS;
    "CFG-TMODE-ECEF_X", 0x40030003, I4, "ECEF X coordinate of the ARP position", unit = "cm";
    "CFG-TMODE-ECEF_Y", 0x40030004, I4, "ECEF Y coordinate of the ARP position", unit = "cm";
    "CFG-TMODE-ECEF_Z", 0x40030005, I4, "ECEF Z coordinate of the ARP position", unit = "cm";
    "CFG-TMODE-ECEF_X_HP", 0x20030006, I1, "High-precision ECEF X coordinate of the ARP position", scale = "0.1" / 0.1, unit = "mm";
    "CFG-TMODE-ECEF_Y_HP", 0x20030007, I1, "High-precision ECEF Y coordinate of the ARP position", scale = "0.1" / 0.1, unit = "mm";
    "CFG-TMODE-ECEF_Z_HP", 0x20030008, I1, "High-precision ECEF Z coordinate of the ARP position", scale = "0.1" / 0.1, unit = "mm";
    "CFG-TMODE-LAT", 0x40030009, I4, "Latitude of the ARP position", scale = "1e-7" / 1e-7, unit = "deg";
    "CFG-TMODE-LON", 0x4003000a, I4, "Longitude of the ARP position", scale = "1e-7" / 1e-7, unit = "deg";
    "CFG-TMODE-HEIGHT", 0x4003000b, I4, "Height of the ARP position", unit = "cm";
    "CFG-TMODE-LAT_HP", 0x2003000c, I1, "High-precision latitude of the ARP position", scale = "1e-9" / 1e-9, unit = "deg";
    "CFG-TMODE-LON_HP", 0x2003000d, I1, "High-precision longitude of the ARP position", scale = "1e-9" / 1e-9, unit = "deg";
    "CFG-TMODE-HEIGHT_HP", 0x2003000e, I1, "High-precision height of the ARP position", scale = "0.1" / 0.1, unit = "mm";
    "CFG-TMODE-FIXED_POS_ACC", 0x4003000f, U4, "Fixed position 3D accuracy", scale = "0.1" / 0.1, unit = "mm";
    "CFG-TMODE-SVIN_MIN_DUR", 0x40030010, U4, "Survey-in minimum duration", unit = "s";
    "CFG-TMODE-SVIN_ACC_LIMIT", 0x40030011, U4, "Survey-in position accuracy limit", scale = "0.1" / 0.1, unit = "mm";

    // CFG-ODO: Odometer and low-speed course over ground filter configuration
    "CFG-ODO-USE_ODO", 0x10220001, L, "Use odometer";
    "CFG-ODO-USE_COG", 0x10220002, L, "Use low-speed course over ground filter";
    "CFG-ODO-OUTLPVEL", 0x10220003, L, "Output low-pass filtered velocity";
    "CFG-ODO-OUTLPCOG", 0x10220004, L, "Output low-pass filtered course over ground (heading)";
    "CFG-ODO-PROFILE", 0x20220005, E1, "Odometer profile configuration", consts = ODO_PROFILE_CONSTS;

    // CFG-ITFM: Jamming and interference monitor configuration
    "CFG-ITFM-BBTHRESHOLD", 0x20410001, U1, "Broadband jamming detection threshold";
    "CFG-ITFM-CWTHRESHOLD", 0x20410002, U1, "CW jamming detection threshold";
    "CFG-ITFM-ENABLE", 0x1041000d, L, "Enable interference detection";
    "CFG-ITFM-ANTSETTING", 0x20410010, E1, "Antenna setting", consts = ITFM_ANTSETTING_CONSTS;
    "CFG-ITFM-ENABLE_AUX", 0x10410013, L, "Scan auxiliary bands";

    // CFG-MOT: Motion detector configuration
    "CFG-MOT-GNSSSPEED_THRS", 0x20250038, U1, "GNSS speed threshold below which platform is considered as stationary", scale = "0.01" / 0.01, unit = "m/s";
    "CFG-MOT-GNSSDIST_THRS", 0x3025003b, U2, "Distance above which GNSS-based stationary motion is exit", unit = "m";

    // CFG-ANA: AssistNow Autonomous and Offline configuration
    "CFG-ANA-USE_ANA", 0x10230001, L, "Use AssistNow Autonomous";
    "CFG-ANA-ORBMAXERR", 0x30230002, U2, "Maximum acceptable (modeled) orbit error", unit = "m";

    // CFG-MSGOUT: Message output configuration
    "CFG-MSGOUT-UBX_NAV_CLOCK_I2C", 0x20910065, U1, "Output rate of the UBX-NAV-CLOCK message on port I2C";
    "CFG-MSGOUT-UBX_NAV_CLOCK_UART1", 0x20910066, U1, "Output rate of the UBX-NAV-CLOCK message on port UART1";
    "CFG-MSGOUT-UBX_NAV_CLOCK_UART2", 0x20910067, U1, "Output rate of the UBX-NAV-CLOCK message on port UART2";
    "CFG-MSGOUT-UBX_NAV_CLOCK_USB", 0x20910068, U1, "Output rate of the UBX-NAV-CLOCK message on port USB";
    "CFG-MSGOUT-UBX_NAV_CLOCK_SPI", 0x20910069, U1, "Output rate of the UBX-NAV-CLOCK message on port SPI";
    "CFG-MSGOUT-UBX_NAV_DOP_I2C", 0x20910038, U1, "Output rate of the UBX-NAV-DOP message on port I2C";
    "CFG-MSGOUT-UBX_NAV_DOP_UART1", 0x20910039, U1, "Output rate of the UBX-NAV-DOP message on port UART1";
    "CFG-MSGOUT-UBX_NAV_DOP_UART2", 0x2091003a, U1, "Output rate of the UBX-NAV-DOP message on port UART2";
    "CFG-MSGOUT-UBX_NAV_DOP_USB", 0x2091003b, U1, "Output rate of the UBX-NAV-DOP message on port USB";
    "CFG-MSGOUT-UBX_NAV_DOP_SPI", 0x2091003c, U1, "Output rate of the UBX-NAV-DOP message on port SPI";
    "CFG-MSGOUT-UBX_NAV_EOE_I2C", 0x2091015f, U1, "Output rate of the UBX-NAV-EOE message on port I2C";
    "CFG-MSGOUT-UBX_NAV_EOE_UART1", 0x20910160, U1, "Output rate of the UBX-NAV-EOE message on port UART1";
    "CFG-MSGOUT-UBX_NAV_EOE_UART2", 0x20910161, U1, "Output rate of the UBX-NAV-EOE message on port UART2";
    "CFG-MSGOUT-UBX_NAV_EOE_USB", 0x20910162, U1, "Output rate of the UBX-NAV-EOE message on port USB";
    "CFG-MSGOUT-UBX_NAV_EOE_SPI", 0x20910163, U1, "Output rate of the UBX-NAV-EOE message on port SPI";
    "CFG-MSGOUT-UBX_NAV_GEOFENCE_I2C", 0x209100a1, U1, "Output rate of the UBX-NAV-GEOFENCE message on port I2C";
    "CFG-MSGOUT-UBX_NAV_GEOFENCE_UART1", 0x209100a2, U1, "Output rate of the UBX-NAV-GEOFENCE message on port UART1";
    "CFG-MSGOUT-UBX_NAV_GEOFENCE_UART2", 0x209100a3, U1, "Output rate of the UBX-NAV-GEOFENCE message on port UART2";
    "CFG-MSGOUT-UBX_NAV_GEOFENCE_USB", 0x209100a4, U1, "Output rate of the UBX-NAV-GEOFENCE message on port USB";
    "CFG-MSGOUT-UBX_NAV_GEOFENCE_SPI", 0x209100a5, U1, "Output rate of the UBX-NAV-GEOFENCE message on port SPI";
    "CFG-MSGOUT-UBX_NAV_HPPOSECEF_I2C", 0x2091002e, U1, "Output rate of the UBX-NAV-HPPOSECEF message on port I2C";
    "CFG-MSGOUT-UBX_NAV_HPPOSECEF_UART1", 0x2091002f, U1, "Output rate of the UBX-NAV-HPPOSECEF message on port UART1";
    "CFG-MSGOUT-UBX_NAV_HPPOSECEF_UART2", 0x20910030, U1, "Output rate of the UBX-NAV-HPPOSECEF message on port UART2";
    "CFG-MSGOUT-UBX_NAV_HPPOSECEF_USB", 0x20910031, U1, "Output rate of the UBX-NAV-HPPOSECEF message on port USB";
    "CFG-MSGOUT-UBX_NAV_HPPOSECEF_SPI", 0x20910032, U1, "Output rate of the UBX-NAV-HPPOSECEF message on port SPI";
    "CFG-MSGOUT-UBX_NAV_HPPOSLLH_I2C", 0x20910033, U1, "Output rate of the UBX-NAV-HPPOSLLH message on port I2C";
    "CFG-MSGOUT-UBX_NAV_HPPOSLLH_UART1", 0x20910034, U1, "Output rate of the UBX-NAV-HPPOSLLH message on port UART1";
    "CFG-MSGOUT-UBX_NAV_HPPOSLLH_UART2", 0x20910035, U1, "Output rate of the UBX-NAV-HPPOSLLH message on port UART2";
    "CFG-MSGOUT-UBX_NAV_HPPOSLLH_USB", 0x20910036, U1, "Output rate of the UBX-NAV-HPPOSLLH message on port USB";
    "CFG-MSGOUT-UBX_NAV_HPPOSLLH_SPI", 0x20910037, U1, "Output rate of the UBX-NAV-HPPOSLLH message on port SPI";
    "CFG-MSGOUT-UBX_NAV_ODO_I2C", 0x2091007e, U1, "Output rate of the UBX-NAV-ODO message on port I2C";
    "CFG-MSGOUT-UBX_NAV_ODO_UART1", 0x2091007f, U1, "Output rate of the UBX-NAV-ODO message on port UART1";
    "CFG-MSGOUT-UBX_NAV_ODO_UART2", 0x20910080, U1, "Output rate of the UBX-NAV-ODO message on port UART2";
    "CFG-MSGOUT-UBX_NAV_ODO_USB", 0x20910081, U1, "Output rate of the UBX-NAV-ODO message on port USB";
    "CFG-MSGOUT-UBX_NAV_ODO_SPI", 0x20910082, U1, "Output rate of the UBX-NAV-ODO message on port SPI";
    "CFG-MSGOUT-UBX_NAV_ORB_I2C", 0x20910010, U1, "Output rate of the UBX-NAV-ORB message on port I2C";
    "CFG-MSGOUT-UBX_NAV_ORB_UART1", 0x20910011, U1, "Output rate of the UBX-NAV-ORB message on port UART1";
    "CFG-MSGOUT-UBX_NAV_ORB_UART2", 0x20910012, U1, "Output rate of the UBX-NAV-ORB message on port UART2";
    "CFG-MSGOUT-UBX_NAV_ORB_USB", 0x20910013, U1, "Output rate of the UBX-NAV-ORB message on port USB";
    "CFG-MSGOUT-UBX_NAV_ORB_SPI", 0x20910014, U1, "Output rate of the UBX-NAV-ORB message on port SPI";
    "CFG-MSGOUT-UBX_NAV_POSECEF_I2C", 0x20910024, U1, "Output rate of the UBX-NAV-POSECEF message on port I2C";
    "CFG-MSGOUT-UBX_NAV_POSECEF_UART1", 0x20910025, U1, "Output rate of the UBX-NAV-POSECEF message on port UART1";
    "CFG-MSGOUT-UBX_NAV_POSECEF_UART2", 0x20910026, U1, "Output rate of the UBX-NAV-POSECEF message on port UART2";
    "CFG-MSGOUT-UBX_NAV_POSECEF_USB", 0x20910027, U1, "Output rate of the UBX-NAV-POSECEF message on port USB";
    "CFG-MSGOUT-UBX_NAV_POSECEF_SPI", 0x20910028, U1, "Output rate of the UBX-NAV-POSECEF message on port SPI";
    "CFG-MSGOUT-UBX_NAV_POSLLH_I2C", 0x20910029, U1, "Output rate of the UBX-NAV-POSLLH message on port I2C";
    "CFG-MSGOUT-UBX_NAV_POSLLH_UART1", 0x2091002a, U1, "Output rate of the UBX-NAV-POSLLH message on port UART1";
    "CFG-MSGOUT-UBX_NAV_POSLLH_UART2", 0x2091002b, U1, "Output rate of the UBX-NAV-POSLLH message on port UART2";
    "CFG-MSGOUT-UBX_NAV_POSLLH_USB", 0x2091002c, U1, "Output rate of the UBX-NAV-POSLLH message on port USB";
    "CFG-MSGOUT-UBX_NAV_POSLLH_SPI", 0x2091002d, U1, "Output rate of the UBX-NAV-POSLLH message on port SPI";
    "CFG-MSGOUT-UBX_NAV_PVT_I2C", 0x20910006, U1, "Output rate of the UBX-NAV-PVT message on port I2C";
    "CFG-MSGOUT-UBX_NAV_PVT_UART1", 0x20910007, U1, "Output rate of the UBX-NAV-PVT message on port UART1";
    "CFG-MSGOUT-UBX_NAV_PVT_UART2", 0x20910008, U1, "Output rate of the UBX-NAV-PVT message on port UART2";
    "CFG-MSGOUT-UBX_NAV_PVT_USB", 0x20910009, U1, "Output rate of the UBX-NAV-PVT message on port USB";
    "CFG-MSGOUT-UBX_NAV_PVT_SPI", 0x2091000a, U1, "Output rate of the UBX-NAV-PVT message on port SPI";
    "CFG-MSGOUT-UBX_NAV_RELPOSNED_I2C", 0x2091008d, U1, "Output rate of the UBX-NAV-RELPOSNED message on port I2C";
    "CFG-MSGOUT-UBX_NAV_RELPOSNED_UART1", 0x2091008e, U1, "Output rate of the UBX-NAV-RELPOSNED message on port UART1";
    "CFG-MSGOUT-UBX_NAV_RELPOSNED_UART2", 0x2091008f, U1, "Output rate of the UBX-NAV-RELPOSNED message on port UART2";
    "CFG-MSGOUT-UBX_NAV_RELPOSNED_USB", 0x20910090, U1, "Output rate of the UBX-NAV-RELPOSNED message on port USB";
    "CFG-MSGOUT-UBX_NAV_RELPOSNED_SPI", 0x20910091, U1, "Output rate of the UBX-NAV-RELPOSNED message on port SPI";
    "CFG-MSGOUT-UBX_NAV_SAT_I2C", 0x20910015, U1, "Output rate of the UBX-NAV-SAT message on port I2C";
    "CFG-MSGOUT-UBX_NAV_SAT_UART1", 0x20910016, U1, "Output rate of the UBX-NAV-SAT message on port UART1";
    "CFG-MSGOUT-UBX_NAV_SAT_UART2", 0x20910017, U1, "Output rate of the UBX-NAV-SAT message on port UART2";
    "CFG-MSGOUT-UBX_NAV_SAT_USB", 0x20910018, U1, "Output rate of the UBX-NAV-SAT message on port USB";
    "CFG-MSGOUT-UBX_NAV_SAT_SPI", 0x20910019, U1, "Output rate of the UBX-NAV-SAT message on port SPI";
    "CFG-MSGOUT-UBX_NAV_SIG_I2C", 0x20910345, U1, "Output rate of the UBX-NAV-SIG message on port I2C";
    "CFG-MSGOUT-UBX_NAV_SIG_UART1", 0x20910346, U1, "Output rate of the UBX-NAV-SIG message on port UART1";
    "CFG-MSGOUT-UBX_NAV_SIG_UART2", 0x20910347, U1, "Output rate of the UBX-NAV-SIG message on port UART2";
    "CFG-MSGOUT-UBX_NAV_SIG_USB", 0x20910348, U1, "Output rate of the UBX-NAV-SIG message on port USB";
    "CFG-MSGOUT-UBX_NAV_SIG_SPI", 0x20910349, U1, "Output rate of the UBX-NAV-SIG message on port SPI";
    "CFG-MSGOUT-UBX_NAV_STATUS_I2C", 0x2091001a, U1, "Output rate of the UBX-NAV-STATUS message on port I2C";
    "CFG-MSGOUT-UBX_NAV_STATUS_UART1", 0x2091001b, U1, "Output rate of the UBX-NAV-STATUS message on port UART1";
    "CFG-MSGOUT-UBX_NAV_STATUS_UART2", 0x2091001c, U1, "Output rate of the UBX-NAV-STATUS message on port UART2";
    "CFG-MSGOUT-UBX_NAV_STATUS_USB", 0x2091001d, U1, "Output rate of the UBX-NAV-STATUS message on port USB";
    "CFG-MSGOUT-UBX_NAV_STATUS_SPI", 0x2091001e, U1, "Output rate of the UBX-NAV-STATUS message on port SPI";
    "CFG-MSGOUT-UBX_NAV_SVIN_I2C", 0x20910088, U1, "Output rate of the UBX-NAV-SVIN message on port I2C";
    "CFG-MSGOUT-UBX_NAV_SVIN_UART1", 0x20910089, U1, "Output rate of the UBX-NAV-SVIN message on port UART1";
    "CFG-MSGOUT-UBX_NAV_SVIN_UART2", 0x2091008a, U1, "Output rate of the UBX-NAV-SVIN message on port UART2";
    "CFG-MSGOUT-UBX_NAV_SVIN_USB", 0x2091008b, U1, "Output rate of the UBX-NAV-SVIN message on port USB";
    "CFG-MSGOUT-UBX_NAV_SVIN_SPI", 0x2091008c, U1, "Output rate of the UBX-NAV-SVIN message on port SPI";
    "CFG-MSGOUT-UBX_NAV_TIMEBDS_I2C", 0x20910051, U1, "Output rate of the UBX-NAV-TIMEBDS message on port I2C";
    "CFG-MSGOUT-UBX_NAV_TIMEBDS_UART1", 0x20910052, U1, "Output rate of the UBX-NAV-TIMEBDS message on port UART1";
    "CFG-MSGOUT-UBX_NAV_TIMEBDS_UART2", 0x20910053, U1, "Output rate of the UBX-NAV-TIMEBDS message on port UART2";
    "CFG-MSGOUT-UBX_NAV_TIMEBDS_USB", 0x20910054, U1, "Output rate of the UBX-NAV-TIMEBDS message on port USB";
    "CFG-MSGOUT-UBX_NAV_TIMEBDS_SPI", 0x20910055, U1, "Output rate of the UBX-NAV-TIMEBDS message on port SPI";
    "CFG-MSGOUT-UBX_NAV_TIMEGAL_I2C", 0x20910056, U1, "Output rate of the UBX-NAV-TIMEGAL message on port I2C";
    "CFG-MSGOUT-UBX_NAV_TIMEGAL_UART1", 0x20910057, U1, "Output rate of the UBX-NAV-TIMEGAL message on port UART1";
    "CFG-MSGOUT-UBX_NAV_TIMEGAL_UART2", 0x20910058, U1, "Output rate of the UBX-NAV-TIMEGAL message on port UART2";
    "CFG-MSGOUT-UBX_NAV_TIMEGAL_USB", 0x20910059, U1, "Output rate of the UBX-NAV-TIMEGAL message on port USB";
    "CFG-MSGOUT-UBX_NAV_TIMEGAL_SPI", 0x2091005a, U1, "Output rate of the UBX-NAV-TIMEGAL message on port SPI";
    "CFG-MSGOUT-UBX_NAV_TIMEGLO_I2C", 0x2091004c, U1, "Output rate of the UBX-NAV-TIMEGLO message on port I2C";
    "CFG-MSGOUT-UBX_NAV_TIMEGLO_UART1", 0x2091004d, U1, "Output rate of the UBX-NAV-TIMEGLO message on port UART1";
    "CFG-MSGOUT-UBX_NAV_TIMEGLO_UART2", 0x2091004e, U1, "Output rate of the UBX-NAV-TIMEGLO message on port UART2";
    "CFG-MSGOUT-UBX_NAV_TIMEGLO_USB", 0x2091004f, U1, "Output rate of the UBX-NAV-TIMEGLO message on port USB";
    "CFG-MSGOUT-UBX_NAV_TIMEGLO_SPI", 0x20910050, U1, "Output rate of the UBX-NAV-TIMEGLO message on port SPI";
    "CFG-MSGOUT-UBX_NAV_TIMEGPS_I2C", 0x20910047, U1, "Output rate of the UBX-NAV-TIMEGPS message on port I2C";
    "CFG-MSGOUT-UBX_NAV_TIMEGPS_UART1", 0x20910048, U1, "Output rate of the UBX-NAV-TIMEGPS message on port UART1";
    "CFG-MSGOUT-UBX_NAV_TIMEGPS_UART2", 0x20910049, U1, "Output rate of the UBX-NAV-TIMEGPS message on port UART2";
    "CFG-MSGOUT-UBX_NAV_TIMEGPS_USB", 0x2091004a, U1, "Output rate of the UBX-NAV-TIMEGPS message on port USB";
    "CFG-MSGOUT-UBX_NAV_TIMEGPS_SPI", 0x2091004b, U1, "Output rate of the UBX-NAV-TIMEGPS message on port SPI";
    "CFG-MSGOUT-UBX_NAV_TIMELS_I2C", 0x20910060, U1, "Output rate of the UBX-NAV-TIMELS message on port I2C";
    "CFG-MSGOUT-UBX_NAV_TIMELS_UART1", 0x20910061, U1, "Output rate of the UBX-NAV-TIMELS message on port UART1";
    "CFG-MSGOUT-UBX_NAV_TIMELS_UART2", 0x20910062, U1, "Output rate of the UBX-NAV-TIMELS message on port UART2";
    "CFG-MSGOUT-UBX_NAV_TIMELS_USB", 0x20910063, U1, "Output rate of the UBX-NAV-TIMELS message on port USB";
    "CFG-MSGOUT-UBX_NAV_TIMELS_SPI", 0x20910064, U1, "Output rate of the UBX-NAV-TIMELS message on port SPI";
    "CFG-MSGOUT-UBX_NAV_TIMEUTC_I2C", 0x2091005b, U1, "Output rate of the UBX-NAV-TIMEUTC message on port I2C";
    "CFG-MSGOUT-UBX_NAV_TIMEUTC_UART1", 0x2091005c, U1, "Output rate of the UBX-NAV-TIMEUTC message on port UART1";
    "CFG-MSGOUT-UBX_NAV_TIMEUTC_UART2", 0x2091005d, U1, "Output rate of the UBX-NAV-TIMEUTC message on port UART2";
    "CFG-MSGOUT-UBX_NAV_TIMEUTC_USB", 0x2091005e, U1, "Output rate of the UBX-NAV-TIMEUTC message on port USB";
    "CFG-MSGOUT-UBX_NAV_TIMEUTC_SPI", 0x2091005f, U1, "Output rate of the UBX-NAV-TIMEUTC message on port SPI";
    "CFG-MSGOUT-UBX_NAV_VELECEF_I2C", 0x2091003d, U1, "Output rate of the UBX-NAV-VELECEF message on port I2C";
    "CFG-MSGOUT-UBX_NAV_VELECEF_UART1", 0x2091003e, U1, "Output rate of the UBX-NAV-VELECEF message on port UART1";
    "CFG-MSGOUT-UBX_NAV_VELECEF_UART2", 0x2091003f, U1, "Output rate of the UBX-NAV-VELECEF message on port UART2";
    "CFG-MSGOUT-UBX_NAV_VELECEF_USB", 0x20910040, U1, "Output rate of the UBX-NAV-VELECEF message on port USB";
    "CFG-MSGOUT-UBX_NAV_VELECEF_SPI", 0x20910041, U1, "Output rate of the UBX-NAV-VELECEF message on port SPI";
    "CFG-MSGOUT-UBX_NAV_VELNED_I2C", 0x20910042, U1, "Output rate of the UBX-NAV-VELNED message on port I2C";
    "CFG-MSGOUT-UBX_NAV_VELNED_UART1", 0x20910043, U1, "Output rate of the UBX-NAV-VELNED message on port UART1";
    "CFG-MSGOUT-UBX_NAV_VELNED_UART2", 0x20910044, U1, "Output rate of the UBX-NAV-VELNED message on port UART2";
    "CFG-MSGOUT-UBX_NAV_VELNED_USB", 0x20910045, U1, "Output rate of the UBX-NAV-VELNED message on port USB";
    "CFG-MSGOUT-UBX_NAV_VELNED_SPI", 0x20910046, U1, "Output rate of the UBX-NAV-VELNED message on port SPI";
    "CFG-MSGOUT-UBX_LOG_INFO_I2C", 0x20910259, U1, "Output rate of the UBX-LOG-INFO message on port I2C";
    "CFG-MSGOUT-UBX_LOG_INFO_UART1", 0x2091025a, U1, "Output rate of the UBX-LOG-INFO message on port UART1";
    "CFG-MSGOUT-UBX_LOG_INFO_UART2", 0x2091025b, U1, "Output rate of the UBX-LOG-INFO message on port UART2";
    "CFG-MSGOUT-UBX_LOG_INFO_USB", 0x2091025c, U1, "Output rate of the UBX-LOG-INFO message on port USB";
    "CFG-MSGOUT-UBX_LOG_INFO_SPI", 0x2091025d, U1, "Output rate of the UBX-LOG-INFO message on port SPI";
    "CFG-MSGOUT-UBX_MON_COMMS_I2C", 0x2091034f, U1, "Output rate of the UBX-MON-COMMS message on port I2C";
    "CFG-MSGOUT-UBX_MON_COMMS_UART1", 0x20910350, U1, "Output rate of the UBX-MON-COMMS message on port UART1";
    "CFG-MSGOUT-UBX_MON_COMMS_UART2", 0x20910351, U1, "Output rate of the UBX-MON-COMMS message on port UART2";
    "CFG-MSGOUT-UBX_MON_COMMS_USB", 0x20910352, U1, "Output rate of the UBX-MON-COMMS message on port USB";
    "CFG-MSGOUT-UBX_MON_COMMS_SPI", 0x20910353, U1, "Output rate of the UBX-MON-COMMS message on port SPI";
    "CFG-MSGOUT-UBX_MON_HW_I2C", 0x209101b4, U1, "Output rate of the UBX-MON-HW message on port I2C";
    "CFG-MSGOUT-UBX_MON_HW_UART1", 0x209101b5, U1, "Output rate of the UBX-MON-HW message on port UART1";
    "CFG-MSGOUT-UBX_MON_HW_UART2", 0x209101b6, U1, "Output rate of the UBX-MON-HW message on port UART2";
    "CFG-MSGOUT-UBX_MON_HW_USB", 0x209101b7, U1, "Output rate of the UBX-MON-HW message on port USB";
    "CFG-MSGOUT-UBX_MON_HW_SPI", 0x209101b8, U1, "Output rate of the UBX-MON-HW message on port SPI";
    "CFG-MSGOUT-UBX_MON_HW2_I2C", 0x209101b9, U1, "Output rate of the UBX-MON-HW2 message on port I2C";
    "CFG-MSGOUT-UBX_MON_HW2_UART1", 0x209101ba, U1, "Output rate of the UBX-MON-HW2 message on port UART1";
    "CFG-MSGOUT-UBX_MON_HW2_UART2", 0x209101bb, U1, "Output rate of the UBX-MON-HW2 message on port UART2";
    "CFG-MSGOUT-UBX_MON_HW2_USB", 0x209101bc, U1, "Output rate of the UBX-MON-HW2 message on port USB";
    "CFG-MSGOUT-UBX_MON_HW2_SPI", 0x209101bd, U1, "Output rate of the UBX-MON-HW2 message on port SPI";
    "CFG-MSGOUT-UBX_MON_HW3_I2C", 0x20910354, U1, "Output rate of the UBX-MON-HW3 message on port I2C";
    "CFG-MSGOUT-UBX_MON_HW3_UART1", 0x20910355, U1, "Output rate of the UBX-MON-HW3 message on port UART1";
    "CFG-MSGOUT-UBX_MON_HW3_UART2", 0x20910356, U1, "Output rate of the UBX-MON-HW3 message on port UART2";
    "CFG-MSGOUT-UBX_MON_HW3_USB", 0x20910357, U1, "Output rate of the UBX-MON-HW3 message on port USB";
    "CFG-MSGOUT-UBX_MON_HW3_SPI", 0x20910358, U1, "Output rate of the UBX-MON-HW3 message on port SPI";
    "CFG-MSGOUT-UBX_MON_IO_I2C", 0x209101a5, U1, "Output rate of the UBX-MON-IO message on port I2C";
    "CFG-MSGOUT-UBX_MON_IO_UART1", 0x209101a6, U1, "Output rate of the UBX-MON-IO message on port UART1";
    "CFG-MSGOUT-UBX_MON_IO_UART2", 0x209101a7, U1, "Output rate of the UBX-MON-IO message on port UART2";
    "CFG-MSGOUT-UBX_MON_IO_USB", 0x209101a8, U1, "Output rate of the UBX-MON-IO message on port USB";
    "CFG-MSGOUT-UBX_MON_IO_SPI", 0x209101a9, U1, "Output rate of the UBX-MON-IO message on port SPI";
    "CFG-MSGOUT-UBX_MON_MSGPP_I2C", 0x20910196, U1, "Output rate of the UBX-MON-MSGPP message on port I2C";
    "CFG-MSGOUT-UBX_MON_MSGPP_UART1", 0x20910197, U1, "Output rate of the UBX-MON-MSGPP message on port UART1";
    "CFG-MSGOUT-UBX_MON_MSGPP_UART2", 0x20910198, U1, "Output rate of the UBX-MON-MSGPP message on port UART2";
    "CFG-MSGOUT-UBX_MON_MSGPP_USB", 0x20910199, U1, "Output rate of the UBX-MON-MSGPP message on port USB";
    "CFG-MSGOUT-UBX_MON_MSGPP_SPI", 0x2091019a, U1, "Output rate of the UBX-MON-MSGPP message on port SPI";
    "CFG-MSGOUT-UBX_MON_RF_I2C", 0x20910359, U1, "Output rate of the UBX-MON-RF message on port I2C";
    "CFG-MSGOUT-UBX_MON_RF_UART1", 0x2091035a, U1, "Output rate of the UBX-MON-RF message on port UART1";
    "CFG-MSGOUT-UBX_MON_RF_UART2", 0x2091035b, U1, "Output rate of the UBX-MON-RF message on port UART2";
    "CFG-MSGOUT-UBX_MON_RF_USB", 0x2091035c, U1, "Output rate of the UBX-MON-RF message on port USB";
    "CFG-MSGOUT-UBX_MON_RF_SPI", 0x2091035d, U1, "Output rate of the UBX-MON-RF message on port SPI";
    "CFG-MSGOUT-UBX_MON_RXBUF_I2C", 0x209101a0, U1, "Output rate of the UBX-MON-RXBUF message on port I2C";
    "CFG-MSGOUT-UBX_MON_RXBUF_UART1", 0x209101a1, U1, "Output rate of the UBX-MON-RXBUF message on port UART1";
    "CFG-MSGOUT-UBX_MON_RXBUF_UART2", 0x209101a2, U1, "Output rate of the UBX-MON-RXBUF message on port UART2";
    "CFG-MSGOUT-UBX_MON_RXBUF_USB", 0x209101a3, U1, "Output rate of the UBX-MON-RXBUF message on port USB";
    "CFG-MSGOUT-UBX_MON_RXBUF_SPI", 0x209101a4, U1, "Output rate of the UBX-MON-RXBUF message on port SPI";
    "CFG-MSGOUT-UBX_MON_RXR_I2C", 0x20910187, U1, "Output rate of the UBX-MON-RXR message on port I2C";
    "CFG-MSGOUT-UBX_MON_RXR_UART1", 0x20910188, U1, "Output rate of the UBX-MON-RXR message on port UART1";
    "CFG-MSGOUT-UBX_MON_RXR_UART2", 0x20910189, U1, "Output rate of the UBX-MON-RXR message on port UART2";
    "CFG-MSGOUT-UBX_MON_RXR_USB", 0x2091018a, U1, "Output rate of the UBX-MON-RXR message on port USB";
    "CFG-MSGOUT-UBX_MON_RXR_SPI", 0x2091018b, U1, "Output rate of the UBX-MON-RXR message on port SPI";
    "CFG-MSGOUT-UBX_MON_TXBUF_I2C", 0x2091019b, U1, "Output rate of the UBX-MON-TXBUF message on port I2C";
    "CFG-MSGOUT-UBX_MON_TXBUF_UART1", 0x2091019c, U1, "Output rate of the UBX-MON-TXBUF message on port UART1";
    "CFG-MSGOUT-UBX_MON_TXBUF_UART2", 0x2091019d, U1, "Output rate of the UBX-MON-TXBUF message on port UART2";
    "CFG-MSGOUT-UBX_MON_TXBUF_USB", 0x2091019e, U1, "Output rate of the UBX-MON-TXBUF message on port USB";
    "CFG-MSGOUT-UBX_MON_TXBUF_SPI", 0x2091019f, U1, "Output rate of the UBX-MON-TXBUF message on port SPI";
    "CFG-MSGOUT-UBX_RXM_MEASX_I2C", 0x20910204, U1, "Output rate of the UBX-RXM-MEASX message on port I2C";
    "CFG-MSGOUT-UBX_RXM_MEASX_UART1", 0x20910205, U1, "Output rate of the UBX-RXM-MEASX message on port UART1";
    "CFG-MSGOUT-UBX_RXM_MEASX_UART2", 0x20910206, U1, "Output rate of the UBX-RXM-MEASX message on port UART2";
    "CFG-MSGOUT-UBX_RXM_MEASX_USB", 0x20910207, U1, "Output rate of the UBX-RXM-MEASX message on port USB";
    "CFG-MSGOUT-UBX_RXM_MEASX_SPI", 0x20910208, U1, "Output rate of the UBX-RXM-MEASX message on port SPI";
    "CFG-MSGOUT-UBX_RXM_RAWX_I2C", 0x209102a4, U1, "Output rate of the UBX-RXM-RAWX message on port I2C";
    "CFG-MSGOUT-UBX_RXM_RAWX_UART1", 0x209102a5, U1, "Output rate of the UBX-RXM-RAWX message on port UART1";
    "CFG-MSGOUT-UBX_RXM_RAWX_UART2", 0x209102a6, U1, "Output rate of the UBX-RXM-RAWX message on port UART2";
    "CFG-MSGOUT-UBX_RXM_RAWX_USB", 0x209102a7, U1, "Output rate of the UBX-RXM-RAWX message on port USB";
    "CFG-MSGOUT-UBX_RXM_RAWX_SPI", 0x209102a8, U1, "Output rate of the UBX-RXM-RAWX message on port SPI";
    "CFG-MSGOUT-UBX_RXM_RLM_I2C", 0x2091025e, U1, "Output rate of the UBX-RXM-RLM message on port I2C";
    "CFG-MSGOUT-UBX_RXM_RLM_UART1", 0x2091025f, U1, "Output rate of the UBX-RXM-RLM message on port UART1";
    "CFG-MSGOUT-UBX_RXM_RLM_UART2", 0x20910260, U1, "Output rate of the UBX-RXM-RLM message on port UART2";
    "CFG-MSGOUT-UBX_RXM_RLM_USB", 0x20910261, U1, "Output rate of the UBX-RXM-RLM message on port USB";
    "CFG-MSGOUT-UBX_RXM_RLM_SPI", 0x20910262, U1, "Output rate of the UBX-RXM-RLM message on port SPI";
    "CFG-MSGOUT-UBX_RXM_RTCM_I2C", 0x20910268, U1, "Output rate of the UBX-RXM-RTCM message on port I2C";
    "CFG-MSGOUT-UBX_RXM_RTCM_UART1", 0x20910269, U1, "Output rate of the UBX-RXM-RTCM message on port UART1";
    "CFG-MSGOUT-UBX_RXM_RTCM_UART2", 0x2091026a, U1, "Output rate of the UBX-RXM-RTCM message on port UART2";
    "CFG-MSGOUT-UBX_RXM_RTCM_USB", 0x2091026b, U1, "Output rate of the UBX-RXM-RTCM message on port USB";
    "CFG-MSGOUT-UBX_RXM_RTCM_SPI", 0x2091026c, U1, "Output rate of the UBX-RXM-RTCM message on port SPI";
    "CFG-MSGOUT-UBX_RXM_SFRBX_I2C", 0x20910231, U1, "Output rate of the UBX-RXM-SFRBX message on port I2C";
    "CFG-MSGOUT-UBX_RXM_SFRBX_UART1", 0x20910232, U1, "Output rate of the UBX-RXM-SFRBX message on port UART1";
    "CFG-MSGOUT-UBX_RXM_SFRBX_UART2", 0x20910233, U1, "Output rate of the UBX-RXM-SFRBX message on port UART2";
    "CFG-MSGOUT-UBX_RXM_SFRBX_USB", 0x20910234, U1, "Output rate of the UBX-RXM-SFRBX message on port USB";
    "CFG-MSGOUT-UBX_RXM_SFRBX_SPI", 0x20910235, U1, "Output rate of the UBX-RXM-SFRBX message on port SPI";
    "CFG-MSGOUT-UBX_TIM_TM2_I2C", 0x20910178, U1, "Output rate of the UBX-TIM-TM2 message on port I2C";
    "CFG-MSGOUT-UBX_TIM_TM2_UART1", 0x20910179, U1, "Output rate of the UBX-TIM-TM2 message on port UART1";
    "CFG-MSGOUT-UBX_TIM_TM2_UART2", 0x2091017a, U1, "Output rate of the UBX-TIM-TM2 message on port UART2";
    "CFG-MSGOUT-UBX_TIM_TM2_USB", 0x2091017b, U1, "Output rate of the UBX-TIM-TM2 message on port USB";
    "CFG-MSGOUT-UBX_TIM_TM2_SPI", 0x2091017c, U1, "Output rate of the UBX-TIM-TM2 message on port SPI";
    "CFG-MSGOUT-UBX_TIM_TP_I2C", 0x2091017d, U1, "Output rate of the UBX-TIM-TP message on port I2C";
    "CFG-MSGOUT-UBX_TIM_TP_UART1", 0x2091017e, U1, "Output rate of the UBX-TIM-TP message on port UART1";
    "CFG-MSGOUT-UBX_TIM_TP_UART2", 0x2091017f, U1, "Output rate of the UBX-TIM-TP message on port UART2";
    "CFG-MSGOUT-UBX_TIM_TP_USB", 0x20910180, U1, "Output rate of the UBX-TIM-TP message on port USB";
    "CFG-MSGOUT-UBX_TIM_TP_SPI", 0x20910181, U1, "Output rate of the UBX-TIM-TP message on port SPI";
    "CFG-MSGOUT-UBX_TIM_VRFY_I2C", 0x20910092, U1, "Output rate of the UBX-TIM-VRFY message on port I2C";
    "CFG-MSGOUT-UBX_TIM_VRFY_UART1", 0x20910093, U1, "Output rate of the UBX-TIM-VRFY message on port UART1";
    "CFG-MSGOUT-UBX_TIM_VRFY_UART2", 0x20910094, U1, "Output rate of the UBX-TIM-VRFY message on port UART2";
    "CFG-MSGOUT-UBX_TIM_VRFY_USB", 0x20910095, U1, "Output rate of the UBX-TIM-VRFY message on port USB";
    "CFG-MSGOUT-UBX_TIM_VRFY_SPI", 0x20910096, U1, "Output rate of the UBX-TIM-VRFY message on port SPI";
    "CFG-MSGOUT-NMEA_ID_DTM_I2C", 0x209100a6, U1, "Output rate of the NMEA-GX-DTM message on port I2C";
    "CFG-MSGOUT-NMEA_ID_DTM_UART1", 0x209100a7, U1, "Output rate of the NMEA-GX-DTM message on port UART1";
    "CFG-MSGOUT-NMEA_ID_DTM_UART2", 0x209100a8, U1, "Output rate of the NMEA-GX-DTM message on port UART2";
    "CFG-MSGOUT-NMEA_ID_DTM_USB", 0x209100a9, U1, "Output rate of the NMEA-GX-DTM message on port USB";
    "CFG-MSGOUT-NMEA_ID_DTM_SPI", 0x209100aa, U1, "Output rate of the NMEA-GX-DTM message on port SPI";
    "CFG-MSGOUT-NMEA_ID_GBS_I2C", 0x209100dd, U1, "Output rate of the NMEA-GX-GBS message on port I2C";
    "CFG-MSGOUT-NMEA_ID_GBS_UART1", 0x209100de, U1, "Output rate of the NMEA-GX-GBS message on port UART1";
    "CFG-MSGOUT-NMEA_ID_GBS_UART2", 0x209100df, U1, "Output rate of the NMEA-GX-GBS message on port UART2";
    "CFG-MSGOUT-NMEA_ID_GBS_USB", 0x209100e0, U1, "Output rate of the NMEA-GX-GBS message on port USB";
    "CFG-MSGOUT-NMEA_ID_GBS_SPI", 0x209100e1, U1, "Output rate of the NMEA-GX-GBS message on port SPI";
    "CFG-MSGOUT-NMEA_ID_GGA_I2C", 0x209100ba, U1, "Output rate of the NMEA-GX-GGA message on port I2C";
    "CFG-MSGOUT-NMEA_ID_GGA_UART1", 0x209100bb, U1, "Output rate of the NMEA-GX-GGA message on port UART1";
    "CFG-MSGOUT-NMEA_ID_GGA_UART2", 0x209100bc, U1, "Output rate of the NMEA-GX-GGA message on port UART2";
    "CFG-MSGOUT-NMEA_ID_GGA_USB", 0x209100bd, U1, "Output rate of the NMEA-GX-GGA message on port USB";
    "CFG-MSGOUT-NMEA_ID_GGA_SPI", 0x209100be, U1, "Output rate of the NMEA-GX-GGA message on port SPI";
    "CFG-MSGOUT-NMEA_ID_GLL_I2C", 0x209100c9, U1, "Output rate of the NMEA-GX-GLL message on port I2C";
    "CFG-MSGOUT-NMEA_ID_GLL_UART1", 0x209100ca, U1, "Output rate of the NMEA-GX-GLL message on port UART1";
    "CFG-MSGOUT-NMEA_ID_GLL_UART2", 0x209100cb, U1, "Output rate of the NMEA-GX-GLL message on port UART2";
    "CFG-MSGOUT-NMEA_ID_GLL_USB", 0x209100cc, U1, "Output rate of the NMEA-GX-GLL message on port USB";
    "CFG-MSGOUT-NMEA_ID_GLL_SPI", 0x209100cd, U1, "Output rate of the NMEA-GX-GLL message on port SPI";
    "CFG-MSGOUT-NMEA_ID_GNS_I2C", 0x209100b5, U1, "Output rate of the NMEA-GX-GNS message on port I2C";
    "CFG-MSGOUT-NMEA_ID_GNS_UART1", 0x209100b6, U1, "Output rate of the NMEA-GX-GNS message on port UART1";
    "CFG-MSGOUT-NMEA_ID_GNS_UART2", 0x209100b7, U1, "Output rate of the NMEA-GX-GNS message on port UART2";
    "CFG-MSGOUT-NMEA_ID_GNS_USB", 0x209100b8, U1, "Output rate of the NMEA-GX-GNS message on port USB";
    "CFG-MSGOUT-NMEA_ID_GNS_SPI", 0x209100b9, U1, "Output rate of the NMEA-GX-GNS message on port SPI";
    "CFG-MSGOUT-NMEA_ID_GRS_I2C", 0x209100ce, U1, "Output rate of the NMEA-GX-GRS message on port I2C";
    "CFG-MSGOUT-NMEA_ID_GRS_UART1", 0x209100cf, U1, "Output rate of the NMEA-GX-GRS message on port UART1";
    "CFG-MSGOUT-NMEA_ID_GRS_UART2", 0x209100d0, U1, "Output rate of the NMEA-GX-GRS message on port UART2";
    "CFG-MSGOUT-NMEA_ID_GRS_USB", 0x209100d1, U1, "Output rate of the NMEA-GX-GRS message on port USB";
    "CFG-MSGOUT-NMEA_ID_GRS_SPI", 0x209100d2, U1, "Output rate of the NMEA-GX-GRS message on port SPI";
    "CFG-MSGOUT-NMEA_ID_GSA_I2C", 0x209100bf, U1, "Output rate of the NMEA-GX-GSA message on port I2C";
    "CFG-MSGOUT-NMEA_ID_GSA_UART1", 0x209100c0, U1, "Output rate of the NMEA-GX-GSA message on port UART1";
    "CFG-MSGOUT-NMEA_ID_GSA_UART2", 0x209100c1, U1, "Output rate of the NMEA-GX-GSA message on port UART2";
    "CFG-MSGOUT-NMEA_ID_GSA_USB", 0x209100c2, U1, "Output rate of the NMEA-GX-GSA message on port USB";
    "CFG-MSGOUT-NMEA_ID_GSA_SPI", 0x209100c3, U1, "Output rate of the NMEA-GX-GSA message on port SPI";
    "CFG-MSGOUT-NMEA_ID_GST_I2C", 0x209100d3, U1, "Output rate of the NMEA-GX-GST message on port I2C";
    "CFG-MSGOUT-NMEA_ID_GST_UART1", 0x209100d4, U1, "Output rate of the NMEA-GX-GST message on port UART1";
    "CFG-MSGOUT-NMEA_ID_GST_UART2", 0x209100d5, U1, "Output rate of the NMEA-GX-GST message on port UART2";
    "CFG-MSGOUT-NMEA_ID_GST_USB", 0x209100d6, U1, "Output rate of the NMEA-GX-GST message on port USB";
    "CFG-MSGOUT-NMEA_ID_GST_SPI", 0x209100d7, U1, "Output rate of the NMEA-GX-GST message on port SPI";
    "CFG-MSGOUT-NMEA_ID_GSV_I2C", 0x209100c4, U1, "Output rate of the NMEA-GX-GSV message on port I2C";
    "CFG-MSGOUT-NMEA_ID_GSV_UART1", 0x209100c5, U1, "Output rate of the NMEA-GX-GSV message on port UART1";
    "CFG-MSGOUT-NMEA_ID_GSV_UART2", 0x209100c6, U1, "Output rate of the NMEA-GX-GSV message on port UART2";
    "CFG-MSGOUT-NMEA_ID_GSV_USB", 0x209100c7, U1, "Output rate of the NMEA-GX-GSV message on port USB";
    "CFG-MSGOUT-NMEA_ID_GSV_SPI", 0x209100c8, U1, "Output rate of the NMEA-GX-GSV message on port SPI";
    "CFG-MSGOUT-NMEA_ID_RMC_I2C", 0x209100ab, U1, "Output rate of the NMEA-GX-RMC message on port I2C";
    "CFG-MSGOUT-NMEA_ID_RMC_UART1", 0x209100ac, U1, "Output rate of the NMEA-GX-RMC message on port UART1";
    "CFG-MSGOUT-NMEA_ID_RMC_UART2", 0x209100ad, U1, "Output rate of the NMEA-GX-RMC message on port UART2";
    "CFG-MSGOUT-NMEA_ID_RMC_USB", 0x209100ae, U1, "Output rate of the NMEA-GX-RMC message on port USB";
    "CFG-MSGOUT-NMEA_ID_RMC_SPI", 0x209100af, U1, "Output rate of the NMEA-GX-RMC message on port SPI";
    "CFG-MSGOUT-NMEA_ID_VLW_I2C", 0x209100e7, U1, "Output rate of the NMEA-GX-VLW message on port I2C";
    "CFG-MSGOUT-NMEA_ID_VLW_UART1", 0x209100e8, U1, "Output rate of the NMEA-GX-VLW message on port UART1";
    "CFG-MSGOUT-NMEA_ID_VLW_UART2", 0x209100e9, U1, "Output rate of the NMEA-GX-VLW message on port UART2";
    "CFG-MSGOUT-NMEA_ID_VLW_USB", 0x209100ea, U1, "Output rate of the NMEA-GX-VLW message on port USB";
    "CFG-MSGOUT-NMEA_ID_VLW_SPI", 0x209100eb, U1, "Output rate of the NMEA-GX-VLW message on port SPI";
    "CFG-MSGOUT-NMEA_ID_VTG_I2C", 0x209100b0, U1, "Output rate of the NMEA-GX-VTG message on port I2C";
    "CFG-MSGOUT-NMEA_ID_VTG_UART1", 0x209100b1, U1, "Output rate of the NMEA-GX-VTG message on port UART1";
    "CFG-MSGOUT-NMEA_ID_VTG_UART2", 0x209100b2, U1, "Output rate of the NMEA-GX-VTG message on port UART2";
    "CFG-MSGOUT-NMEA_ID_VTG_USB", 0x209100b3, U1, "Output rate of the NMEA-GX-VTG message on port USB";
    "CFG-MSGOUT-NMEA_ID_VTG_SPI", 0x209100b4, U1, "Output rate of the NMEA-GX-VTG message on port SPI";
    "CFG-MSGOUT-NMEA_ID_ZDA_I2C", 0x209100d8, U1, "Output rate of the NMEA-GX-ZDA message on port I2C";
    "CFG-MSGOUT-NMEA_ID_ZDA_UART1", 0x209100d9, U1, "Output rate of the NMEA-GX-ZDA message on port UART1";
    "CFG-MSGOUT-NMEA_ID_ZDA_UART2", 0x209100da, U1, "Output rate of the NMEA-GX-ZDA message on port UART2";
    "CFG-MSGOUT-NMEA_ID_ZDA_USB", 0x209100db, U1, "Output rate of the NMEA-GX-ZDA message on port USB";
    "CFG-MSGOUT-NMEA_ID_ZDA_SPI", 0x209100dc, U1, "Output rate of the NMEA-GX-ZDA message on port SPI";
    "CFG-MSGOUT-PUBX_ID_POLYP_I2C", 0x209100ec, U1, "Output rate of the NMEA-GX-PUBX00 message on port I2C";
    "CFG-MSGOUT-PUBX_ID_POLYP_UART1", 0x209100ed, U1, "Output rate of the NMEA-GX-PUBX00 message on port UART1";
    "CFG-MSGOUT-PUBX_ID_POLYP_UART2", 0x209100ee, U1, "Output rate of the NMEA-GX-PUBX00 message on port UART2";
    "CFG-MSGOUT-PUBX_ID_POLYP_USB", 0x209100ef, U1, "Output rate of the NMEA-GX-PUBX00 message on port USB";
    "CFG-MSGOUT-PUBX_ID_POLYP_SPI", 0x209100f0, U1, "Output rate of the NMEA-GX-PUBX00 message on port SPI";
    "CFG-MSGOUT-PUBX_ID_POLYS_I2C", 0x209100f1, U1, "Output rate of the NMEA-GX-PUBX03 message on port I2C";
    "CFG-MSGOUT-PUBX_ID_POLYS_UART1", 0x209100f2, U1, "Output rate of the NMEA-GX-PUBX03 message on port UART1";
    "CFG-MSGOUT-PUBX_ID_POLYS_UART2", 0x209100f3, U1, "Output rate of the NMEA-GX-PUBX03 message on port UART2";
    "CFG-MSGOUT-PUBX_ID_POLYS_USB", 0x209100f4, U1, "Output rate of the NMEA-GX-PUBX03 message on port USB";
    "CFG-MSGOUT-PUBX_ID_POLYS_SPI", 0x209100f5, U1, "Output rate of the NMEA-GX-PUBX03 message on port SPI";
    "CFG-MSGOUT-PUBX_ID_POLYT_I2C", 0x209100f6, U1, "Output rate of the NMEA-GX-PUBX04 message on port I2C";
    "CFG-MSGOUT-PUBX_ID_POLYT_UART1", 0x209100f7, U1, "Output rate of the NMEA-GX-PUBX04 message on port UART1";
    "CFG-MSGOUT-PUBX_ID_POLYT_UART2", 0x209100f8, U1, "Output rate of the NMEA-GX-PUBX04 message on port UART2";
    "CFG-MSGOUT-PUBX_ID_POLYT_USB", 0x209100f9, U1, "Output rate of the NMEA-GX-PUBX04 message on port USB";
    "CFG-MSGOUT-PUBX_ID_POLYT_SPI", 0x209100fa, U1, "Output rate of the NMEA-GX-PUBX04 message on port SPI";
    "CFG-MSGOUT-RTCM_3X_TYPE1005_I2C", 0x209102bd, U1, "Output rate of the RTCM-3X-TYPE1005 message on port I2C";
    "CFG-MSGOUT-RTCM_3X_TYPE1005_UART1", 0x209102be, U1, "Output rate of the RTCM-3X-TYPE1005 message on port UART1";
    "CFG-MSGOUT-RTCM_3X_TYPE1005_UART2", 0x209102bf, U1, "Output rate of the RTCM-3X-TYPE1005 message on port UART2";
    "CFG-MSGOUT-RTCM_3X_TYPE1005_USB", 0x209102c0, U1, "Output rate of the RTCM-3X-TYPE1005 message on port USB";
    "CFG-MSGOUT-RTCM_3X_TYPE1005_SPI", 0x209102c1, U1, "Output rate of the RTCM-3X-TYPE1005 message on port SPI";
    "CFG-MSGOUT-RTCM_3X_TYPE1074_I2C", 0x2091035e, U1, "Output rate of the RTCM-3X-TYPE1074 message on port I2C";
    "CFG-MSGOUT-RTCM_3X_TYPE1074_UART1", 0x2091035f, U1, "Output rate of the RTCM-3X-TYPE1074 message on port UART1";
    "CFG-MSGOUT-RTCM_3X_TYPE1074_UART2", 0x20910360, U1, "Output rate of the RTCM-3X-TYPE1074 message on port UART2";
    "CFG-MSGOUT-RTCM_3X_TYPE1074_USB", 0x20910361, U1, "Output rate of the RTCM-3X-TYPE1074 message on port USB";
    "CFG-MSGOUT-RTCM_3X_TYPE1074_SPI", 0x20910362, U1, "Output rate of the RTCM-3X-TYPE1074 message on port SPI";
    "CFG-MSGOUT-RTCM_3X_TYPE1077_I2C", 0x209102cc, U1, "Output rate of the RTCM-3X-TYPE1077 message on port I2C";
    "CFG-MSGOUT-RTCM_3X_TYPE1077_UART1", 0x209102cd, U1, "Output rate of the RTCM-3X-TYPE1077 message on port UART1";
    "CFG-MSGOUT-RTCM_3X_TYPE1077_UART2", 0x209102ce, U1, "Output rate of the RTCM-3X-TYPE1077 message on port UART2";
    "CFG-MSGOUT-RTCM_3X_TYPE1077_USB", 0x209102cf, U1, "Output rate of the RTCM-3X-TYPE1077 message on port USB";
    "CFG-MSGOUT-RTCM_3X_TYPE1077_SPI", 0x209102d0, U1, "Output rate of the RTCM-3X-TYPE1077 message on port SPI";
    "CFG-MSGOUT-RTCM_3X_TYPE1084_I2C", 0x20910363, U1, "Output rate of the RTCM-3X-TYPE1084 message on port I2C";
    "CFG-MSGOUT-RTCM_3X_TYPE1084_UART1", 0x20910364, U1, "Output rate of the RTCM-3X-TYPE1084 message on port UART1";
    "CFG-MSGOUT-RTCM_3X_TYPE1084_UART2", 0x20910365, U1, "Output rate of the RTCM-3X-TYPE1084 message on port UART2";
    "CFG-MSGOUT-RTCM_3X_TYPE1084_USB", 0x20910366, U1, "Output rate of the RTCM-3X-TYPE1084 message on port USB";
    "CFG-MSGOUT-RTCM_3X_TYPE1084_SPI", 0x20910367, U1, "Output rate of the RTCM-3X-TYPE1084 message on port SPI";
    "CFG-MSGOUT-RTCM_3X_TYPE1087_I2C", 0x209102d1, U1, "Output rate of the RTCM-3X-TYPE1087 message on port I2C";
    "CFG-MSGOUT-RTCM_3X_TYPE1087_UART1", 0x209102d2, U1, "Output rate of the RTCM-3X-TYPE1087 message on port UART1";
    "CFG-MSGOUT-RTCM_3X_TYPE1087_UART2", 0x209102d3, U1, "Output rate of the RTCM-3X-TYPE1087 message on port UART2";
    "CFG-MSGOUT-RTCM_3X_TYPE1087_USB", 0x209102d4, U1, "Output rate of the RTCM-3X-TYPE1087 message on port USB";
    "CFG-MSGOUT-RTCM_3X_TYPE1087_SPI", 0x209102d5, U1, "Output rate of the RTCM-3X-TYPE1087 message on port SPI";
    "CFG-MSGOUT-RTCM_3X_TYPE1094_I2C", 0x20910368, U1, "Output rate of the RTCM-3X-TYPE1094 message on port I2C";
    "CFG-MSGOUT-RTCM_3X_TYPE1094_UART1", 0x20910369, U1, "Output rate of the RTCM-3X-TYPE1094 message on port UART1";
    "CFG-MSGOUT-RTCM_3X_TYPE1094_UART2", 0x2091036a, U1, "Output rate of the RTCM-3X-TYPE1094 message on port UART2";
    "CFG-MSGOUT-RTCM_3X_TYPE1094_USB", 0x2091036b, U1, "Output rate of the RTCM-3X-TYPE1094 message on port USB";
    "CFG-MSGOUT-RTCM_3X_TYPE1094_SPI", 0x2091036c, U1, "Output rate of the RTCM-3X-TYPE1094 message on port SPI";
    "CFG-MSGOUT-RTCM_3X_TYPE1097_I2C", 0x20910318, U1, "Output rate of the RTCM-3X-TYPE1097 message on port I2C";
    "CFG-MSGOUT-RTCM_3X_TYPE1097_UART1", 0x20910319, U1, "Output rate of the RTCM-3X-TYPE1097 message on port UART1";
    "CFG-MSGOUT-RTCM_3X_TYPE1097_UART2", 0x2091031a, U1, "Output rate of the RTCM-3X-TYPE1097 message on port UART2";
    "CFG-MSGOUT-RTCM_3X_TYPE1097_USB", 0x2091031b, U1, "Output rate of the RTCM-3X-TYPE1097 message on port USB";
    "CFG-MSGOUT-RTCM_3X_TYPE1097_SPI", 0x2091031c, U1, "Output rate of the RTCM-3X-TYPE1097 message on port SPI";
    "CFG-MSGOUT-RTCM_3X_TYPE1124_I2C", 0x2091036d, U1, "Output rate of the RTCM-3X-TYPE1124 message on port I2C";
    "CFG-MSGOUT-RTCM_3X_TYPE1124_UART1", 0x2091036e, U1, "Output rate of the RTCM-3X-TYPE1124 message on port UART1";
    "CFG-MSGOUT-RTCM_3X_TYPE1124_UART2", 0x2091036f, U1, "Output rate of the RTCM-3X-TYPE1124 message on port UART2";
    "CFG-MSGOUT-RTCM_3X_TYPE1124_USB", 0x20910370, U1, "Output rate of the RTCM-3X-TYPE1124 message on port USB";
    "CFG-MSGOUT-RTCM_3X_TYPE1124_SPI", 0x20910371, U1, "Output rate of the RTCM-3X-TYPE1124 message on port SPI";
    "CFG-MSGOUT-RTCM_3X_TYPE1127_I2C", 0x209102d6, U1, "Output rate of the RTCM-3X-TYPE1127 message on port I2C";
    "CFG-MSGOUT-RTCM_3X_TYPE1127_UART1", 0x209102d7, U1, "Output rate of the RTCM-3X-TYPE1127 message on port UART1";
    "CFG-MSGOUT-RTCM_3X_TYPE1127_UART2", 0x209102d8, U1, "Output rate of the RTCM-3X-TYPE1127 message on port UART2";
    "CFG-MSGOUT-RTCM_3X_TYPE1127_USB", 0x209102d9, U1, "Output rate of the RTCM-3X-TYPE1127 message on port USB";
    "CFG-MSGOUT-RTCM_3X_TYPE1127_SPI", 0x209102da, U1, "Output rate of the RTCM-3X-TYPE1127 message on port SPI";
    "CFG-MSGOUT-RTCM_3X_TYPE1230_I2C", 0x20910303, U1, "Output rate of the RTCM-3X-TYPE1230 message on port I2C";
    "CFG-MSGOUT-RTCM_3X_TYPE1230_UART1", 0x20910304, U1, "Output rate of the RTCM-3X-TYPE1230 message on port UART1";
    "CFG-MSGOUT-RTCM_3X_TYPE1230_UART2", 0x20910305, U1, "Output rate of the RTCM-3X-TYPE1230 message on port UART2";
    "CFG-MSGOUT-RTCM_3X_TYPE1230_USB", 0x20910306, U1, "Output rate of the RTCM-3X-TYPE1230 message on port USB";
    "CFG-MSGOUT-RTCM_3X_TYPE1230_SPI", 0x20910307, U1, "Output rate of the RTCM-3X-TYPE1230 message on port SPI";
    "CFG-MSGOUT-RTCM_3X_TYPE4072_0_I2C", 0x209102fe, U1, "Output rate of the RTCM-3X-TYPE4072_0 message on port I2C";
    "CFG-MSGOUT-RTCM_3X_TYPE4072_0_UART1", 0x209102ff, U1, "Output rate of the RTCM-3X-TYPE4072_0 message on port UART1";
    "CFG-MSGOUT-RTCM_3X_TYPE4072_0_UART2", 0x20910300, U1, "Output rate of the RTCM-3X-TYPE4072_0 message on port UART2";
    "CFG-MSGOUT-RTCM_3X_TYPE4072_0_USB", 0x20910301, U1, "Output rate of the RTCM-3X-TYPE4072_0 message on port USB";
    "CFG-MSGOUT-RTCM_3X_TYPE4072_0_SPI", 0x20910302, U1, "Output rate of the RTCM-3X-TYPE4072_0 message on port SPI";
    "CFG-MSGOUT-RTCM_3X_TYPE4072_1_I2C", 0x20910381, U1, "Output rate of the RTCM-3X-TYPE4072_1 message on port I2C";
    "CFG-MSGOUT-RTCM_3X_TYPE4072_1_UART1", 0x20910382, U1, "Output rate of the RTCM-3X-TYPE4072_1 message on port UART1";
    "CFG-MSGOUT-RTCM_3X_TYPE4072_1_UART2", 0x20910383, U1, "Output rate of the RTCM-3X-TYPE4072_1 message on port UART2";
    "CFG-MSGOUT-RTCM_3X_TYPE4072_1_USB", 0x20910384, U1, "Output rate of the RTCM-3X-TYPE4072_1 message on port USB";
    "CFG-MSGOUT-RTCM_3X_TYPE4072_1_SPI", 0x20910385, U1, "Output rate of the RTCM-3X-TYPE4072_1 message on port SPI";

    // CFG-UBLOXCFGTEST: Test group used by the test suite, not a receiver group
    "CFG-UBLOXCFGTEST-L", 0x10fe0001, L, "Test L item";
    "CFG-UBLOXCFGTEST-U1", 0x20fe0011, U1, "Test U1 item";
    "CFG-UBLOXCFGTEST-U2", 0x30fe0012, U2, "Test U2 item";
    "CFG-UBLOXCFGTEST-U4", 0x40fe0013, U4, "Test U4 item";
    "CFG-UBLOXCFGTEST-U8", 0x50fe0014, U8, "Test U8 item";
    "CFG-UBLOXCFGTEST-I1", 0x20fe0021, I1, "Test I1 item";
    "CFG-UBLOXCFGTEST-I2", 0x30fe0022, I2, "Test I2 item";
    "CFG-UBLOXCFGTEST-I4", 0x40fe0023, I4, "Test I4 item";
    "CFG-UBLOXCFGTEST-I8", 0x50fe0024, I8, "Test I8 item";
    "CFG-UBLOXCFGTEST-X1", 0x20fe0031, X1, "Test X1 item", consts = TEST_X1_CONSTS;
    "CFG-UBLOXCFGTEST-X2", 0x30fe0032, X2, "Test X2 item";
    "CFG-UBLOXCFGTEST-X4", 0x40fe0033, X4, "Test X4 item";
    "CFG-UBLOXCFGTEST-X8", 0x50fe0034, X8, "Test X8 item", consts = TEST_X8_CONSTS;
    "CFG-UBLOXCFGTEST-R4", 0x40fe0041, R4, "Test R4 item";
    "CFG-UBLOXCFGTEST-R8", 0x50fe0042, R8, "Test R8 item";
    "CFG-UBLOXCFGTEST-E1", 0x20fe0041, E1, "Test E1 item", consts = TEST_E1_CONSTS;
    "CFG-UBLOXCFGTEST-E2", 0x30fe0042, E2, "Test E2 item", consts = TEST_E2_CONSTS;
    "CFG-UBLOXCFGTEST-E4", 0x40fe0043, E4, "Test E4 item", consts = TEST_E4_CONSTS;
}

macro_rules! msgrate {
    ($msg:literal, $i2c:literal) => {
        MsgRate {
            msg_name: $msg,
            i2c: $i2c,
            uart1: $i2c + 1,
            uart2: $i2c + 2,
            usb: $i2c + 3,
            spi: $i2c + 4,
        }
    };
}

/// Output message rate configurations, one entry per outputable message.
/// The per-port item ids follow the receiver's I2C, UART1, UART2, USB, SPI
/// id layout of the CFG-MSGOUT group.
pub static ALL_MSGRATES: &[MsgRate] = &[
    msgrate!("UBX-NAV-CLOCK", 0x20910065),
    msgrate!("UBX-NAV-DOP", 0x20910038),
    msgrate!("UBX-NAV-EOE", 0x2091015f),
    msgrate!("UBX-NAV-GEOFENCE", 0x209100a1),
    msgrate!("UBX-NAV-HPPOSECEF", 0x2091002e),
    msgrate!("UBX-NAV-HPPOSLLH", 0x20910033),
    msgrate!("UBX-NAV-ODO", 0x2091007e),
    msgrate!("UBX-NAV-ORB", 0x20910010),
    msgrate!("UBX-NAV-POSECEF", 0x20910024),
    msgrate!("UBX-NAV-POSLLH", 0x20910029),
    msgrate!("UBX-NAV-PVT", 0x20910006),
    msgrate!("UBX-NAV-RELPOSNED", 0x2091008d),
    msgrate!("UBX-NAV-SAT", 0x20910015),
    msgrate!("UBX-NAV-SIG", 0x20910345),
    msgrate!("UBX-NAV-STATUS", 0x2091001a),
    msgrate!("UBX-NAV-SVIN", 0x20910088),
    msgrate!("UBX-NAV-TIMEBDS", 0x20910051),
    msgrate!("UBX-NAV-TIMEGAL", 0x20910056),
    msgrate!("UBX-NAV-TIMEGLO", 0x2091004c),
    msgrate!("UBX-NAV-TIMEGPS", 0x20910047),
    msgrate!("UBX-NAV-TIMELS", 0x20910060),
    msgrate!("UBX-NAV-TIMEUTC", 0x2091005b),
    msgrate!("UBX-NAV-VELECEF", 0x2091003d),
    msgrate!("UBX-NAV-VELNED", 0x20910042),
    msgrate!("UBX-LOG-INFO", 0x20910259),
    msgrate!("UBX-MON-COMMS", 0x2091034f),
    msgrate!("UBX-MON-HW", 0x209101b4),
    msgrate!("UBX-MON-HW2", 0x209101b9),
    msgrate!("UBX-MON-HW3", 0x20910354),
    msgrate!("UBX-MON-IO", 0x209101a5),
    msgrate!("UBX-MON-MSGPP", 0x20910196),
    msgrate!("UBX-MON-RF", 0x20910359),
    msgrate!("UBX-MON-RXBUF", 0x209101a0),
    msgrate!("UBX-MON-RXR", 0x20910187),
    msgrate!("UBX-MON-TXBUF", 0x2091019b),
    msgrate!("UBX-RXM-MEASX", 0x20910204),
    msgrate!("UBX-RXM-RAWX", 0x209102a4),
    msgrate!("UBX-RXM-RLM", 0x2091025e),
    msgrate!("UBX-RXM-RTCM", 0x20910268),
    msgrate!("UBX-RXM-SFRBX", 0x20910231),
    msgrate!("UBX-TIM-TM2", 0x20910178),
    msgrate!("UBX-TIM-TP", 0x2091017d),
    msgrate!("UBX-TIM-VRFY", 0x20910092),
    msgrate!("NMEA-STANDARD-DTM", 0x209100a6),
    msgrate!("NMEA-STANDARD-GBS", 0x209100dd),
    msgrate!("NMEA-STANDARD-GGA", 0x209100ba),
    msgrate!("NMEA-STANDARD-GLL", 0x209100c9),
    msgrate!("NMEA-STANDARD-GNS", 0x209100b5),
    msgrate!("NMEA-STANDARD-GRS", 0x209100ce),
    msgrate!("NMEA-STANDARD-GSA", 0x209100bf),
    msgrate!("NMEA-STANDARD-GST", 0x209100d3),
    msgrate!("NMEA-STANDARD-GSV", 0x209100c4),
    msgrate!("NMEA-STANDARD-RMC", 0x209100ab),
    msgrate!("NMEA-STANDARD-VLW", 0x209100e7),
    msgrate!("NMEA-STANDARD-VTG", 0x209100b0),
    msgrate!("NMEA-STANDARD-ZDA", 0x209100d8),
    msgrate!("NMEA-PUBX-POSITION", 0x209100ec),
    msgrate!("NMEA-PUBX-SVSTATUS", 0x209100f1),
    msgrate!("NMEA-PUBX-TIME", 0x209100f6),
    msgrate!("RTCM-3X-TYPE1005", 0x209102bd),
    msgrate!("RTCM-3X-TYPE1074", 0x2091035e),
    msgrate!("RTCM-3X-TYPE1077", 0x209102cc),
    msgrate!("RTCM-3X-TYPE1084", 0x20910363),
    msgrate!("RTCM-3X-TYPE1087", 0x209102d1),
    msgrate!("RTCM-3X-TYPE1094", 0x20910368),
    msgrate!("RTCM-3X-TYPE1097", 0x20910318),
    msgrate!("RTCM-3X-TYPE1124", 0x2091036d),
    msgrate!("RTCM-3X-TYPE1127", 0x209102d6),
    msgrate!("RTCM-3X-TYPE1230", 0x20910303),
    msgrate!("RTCM-3X-TYPE4072_0", 0x209102fe),
    msgrate!("RTCM-3X-TYPE4072_1", 0x20910381),
];
