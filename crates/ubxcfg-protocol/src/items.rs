//! Configuration item database for the `CFG-VALSET` key/value extension.
//!
//! Each item maps a vendor-defined name to its 32-bit configuration key and
//! the field type of its value. The table is generated from the receiver
//! interface description (key set courtesy of gpsd's ubxtool) and is never
//! mutated at runtime. The upper key byte encodes the value's storage size,
//! but the authoritative type used for packing is the one recorded here.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::fields::FieldType;

/// One named, numerically keyed device setting.
#[derive(Debug, Clone, Copy)]
pub struct ConfigItem {
    /// Item name, without the `CFG-` prefix.
    pub name: &'static str,
    /// 32-bit configuration key.
    pub key: u32,
    /// Field type of the item's value.
    pub value_type: FieldType,
}

const fn item(name: &'static str, key: u32, value_type: FieldType) -> ConfigItem {
    ConfigItem {
        name,
        key,
        value_type,
    }
}

/// All known configuration items.
pub static CONFIG_ITEMS: &[ConfigItem] = &[
    item("GEOFENCE-CONFLVL", 0x20240011, FieldType::U8),
    item("GEOFENCE-USE_PIO", 0x10240012, FieldType::U8),
    item("GEOFENCE-PINPOL", 0x20240013, FieldType::U8),
    item("GEOFENCE-PIN", 0x20240014, FieldType::U8),
    item("GEOFENCE-USE_FENCE1", 0x10240020, FieldType::U8),
    item("GEOFENCE-FENCE1_LAT", 0x40240021, FieldType::I32),
    item("GEOFENCE-FENCE1_LON", 0x40240022, FieldType::I32),
    item("GEOFENCE-FENCE1_RAD", 0x40240023, FieldType::U32),
    item("GEOFENCE-USE_FENCE2", 0x10240030, FieldType::U8),
    item("GEOFENCE-FENCE2_LAT", 0x40240031, FieldType::I32),
    item("GEOFENCE-FENCE2_LON", 0x40240032, FieldType::I32),
    item("GEOFENCE-FENCE2_RAD", 0x40240033, FieldType::U32),
    item("GEOFENCE-USE_FENCE3", 0x10240040, FieldType::U8),
    item("GEOFENCE-FENCE3_LAT", 0x40240041, FieldType::I32),
    item("GEOFENCE-FENCE3_LON", 0x40240042, FieldType::I32),
    item("GEOFENCE-FENCE3_RAD", 0x40240043, FieldType::U32),
    item("GEOFENCE-USE_FENCE4", 0x10240050, FieldType::U8),
    item("GEOFENCE-FENCE4_LAT", 0x40240051, FieldType::I32),
    item("GEOFENCE-FENCE4_LON", 0x40240052, FieldType::I32),
    item("GEOFENCE-FENCE4_RAD", 0x40240053, FieldType::U32),
    item("HW-ANT_CFG_VOLTCTRL", 0x10a3002e, FieldType::U8),
    item("HW-ANT_CFG_SHORTDET", 0x10a3002f, FieldType::U8),
    item("HW-ANT_CFG_SHORTDET_POL", 0x10a30030, FieldType::U8),
    item("HW-ANT_CFG_OPENDET", 0x10a30031, FieldType::U8),
    item("HW-ANT_CFG_OPENDET_POL", 0x10a30032, FieldType::U8),
    item("HW-ANT_CFG_PWRDOWN", 0x10a30033, FieldType::U8),
    item("HW-ANT_CFG_PWRDOWN_POL", 0x10a30034, FieldType::U8),
    item("HW-ANT_CFG_RECOVER", 0x10a30035, FieldType::U8),
    item("HW-ANT_SUP_SWITCH_PIN", 0x20a30036, FieldType::U8),
    item("HW-ANT_SUP_SHORT_PIN", 0x20a30037, FieldType::U8),
    item("HW-ANT_SUP_OPEN_PIN", 0x20a30038, FieldType::U8),
    item("I2C-ADDRESS", 0x20510001, FieldType::U8),
    item("I2C-EXTENDEDTIMEOUT", 0x10510002, FieldType::U8),
    item("I2C-ENABLED", 0x10510003, FieldType::U8),
    item("I2CINPROT-UBX", 0x10710001, FieldType::U8),
    item("I2CINPROT-NMEA", 0x10710002, FieldType::U8),
    item("I2CINPROT-RTCM2X", 0x10710003, FieldType::U8),
    item("I2CINPROT-RTCM3X", 0x10710004, FieldType::U8),
    item("I2COUTPROT-UBX", 0x10720001, FieldType::U8),
    item("I2COUTPROT-NMEA", 0x10720002, FieldType::U8),
    item("I2COUTPROT-RTCM3X", 0x10720004, FieldType::U8),
    item("INFMSG-UBX_I2C", 0x20920001, FieldType::U8),
    item("INFMSG-UBX_UART1", 0x20920002, FieldType::U8),
    item("INFMSG-UBX_UART2", 0x20920003, FieldType::U8),
    item("INFMSG-UBX_USB", 0x20920004, FieldType::U8),
    item("INFMSG-UBX_SPI", 0x20920005, FieldType::U8),
    item("INFMSG-NMEA_I2C", 0x20920006, FieldType::U8),
    item("INFMSG-NMEA_UART1", 0x20920007, FieldType::U8),
    item("INFMSG-NMEA_UART2", 0x20920008, FieldType::U8),
    item("INFMSG-NMEA_USB", 0x20920009, FieldType::U8),
    item("INFMSG-NMEA_SPI", 0x2092000a, FieldType::U8),
    item("ITFM-BBTHRESHOLD", 0x20410001, FieldType::U8),
    item("ITFM-CWTHRESHOLD", 0x20410002, FieldType::U8),
    item("ITFM-ENABLE", 0x1041000d, FieldType::U8),
    item("ITFM-ANTSETTING", 0x20410010, FieldType::U8),
    item("ITFM-ENABLE_AUX", 0x10410013, FieldType::U8),
    item("LOGFILTER-RECORD_ENA", 0x10de0002, FieldType::U8),
    item("LOGFILTER-ONCE_PER_WAKE_UP_ENA", 0x10de0003, FieldType::U8),
    item("LOGFILTER-APPLY_ALL_FILTERS", 0x10de0004, FieldType::U8),
    item("LOGFILTER-MIN_INTERVAL", 0x30de0005, FieldType::U16),
    item("LOGFILTER-TIME_THRS", 0x30de0006, FieldType::U16),
    item("LOGFILTER-SPEED_THRS", 0x30de0007, FieldType::U16),
    item("LOGFILTER-POSITION_THRS", 0x40de0008, FieldType::U32),
    item("MOT-GNSSSPEED_THRS", 0x20250038, FieldType::U8),
    item("MOT-GNSSDIST_THRS", 0x3025003b, FieldType::U16),
    item("MSGOUT-NMEA_ID_DTM_I2C", 0x209100a6, FieldType::U8),
    item("MSGOUT-NMEA_ID_DTM_SPI", 0x209100aa, FieldType::U8),
    item("MSGOUT-NMEA_ID_DTM_UART1", 0x209100a7, FieldType::U8),
    item("MSGOUT-NMEA_ID_DTM_UART2", 0x209100a8, FieldType::U8),
    item("MSGOUT-NMEA_ID_DTM_USB", 0x209100a9, FieldType::U8),
    item("MSGOUT-NMEA_ID_GBS_I2C", 0x209100dd, FieldType::U8),
    item("MSGOUT-NMEA_ID_GBS_SPI", 0x209100e1, FieldType::U8),
    item("MSGOUT-NMEA_ID_GBS_UART1", 0x209100de, FieldType::U8),
    item("MSGOUT-NMEA_ID_GBS_UART2", 0x209100df, FieldType::U8),
    item("MSGOUT-NMEA_ID_GBS_USB", 0x209100e0, FieldType::U8),
    item("MSGOUT-NMEA_ID_GGA_I2C", 0x209100ba, FieldType::U8),
    item("MSGOUT-NMEA_ID_GGA_SPI", 0x209100be, FieldType::U8),
    item("MSGOUT-NMEA_ID_GGA_UART1", 0x209100bb, FieldType::U8),
    item("MSGOUT-NMEA_ID_GGA_UART2", 0x209100bc, FieldType::U8),
    item("MSGOUT-NMEA_ID_GGA_USB", 0x209100bd, FieldType::U8),
    item("MSGOUT-NMEA_ID_GLL_I2C", 0x209100c9, FieldType::U8),
    item("MSGOUT-NMEA_ID_GLL_SPI", 0x209100cd, FieldType::U8),
    item("MSGOUT-NMEA_ID_GLL_UART1", 0x209100ca, FieldType::U8),
    item("MSGOUT-NMEA_ID_GLL_UART2", 0x209100cb, FieldType::U8),
    item("MSGOUT-NMEA_ID_GLL_USB", 0x209100cc, FieldType::U8),
    item("MSGOUT-NMEA_ID_GNS_I2C", 0x209100b5, FieldType::U8),
    item("MSGOUT-NMEA_ID_GNS_SPI", 0x209100b9, FieldType::U8),
    item("MSGOUT-NMEA_ID_GNS_UART1", 0x209100b6, FieldType::U8),
    item("MSGOUT-NMEA_ID_GNS_UART2", 0x209100b7, FieldType::U8),
    item("MSGOUT-NMEA_ID_GNS_USB", 0x209100b8, FieldType::U8),
    item("MSGOUT-NMEA_ID_GRS_I2C", 0x209100ce, FieldType::U8),
    item("MSGOUT-NMEA_ID_GRS_SPI", 0x209100d2, FieldType::U8),
    item("MSGOUT-NMEA_ID_GRS_UART1", 0x209100cf, FieldType::U8),
    item("MSGOUT-NMEA_ID_GRS_UART2", 0x209100d0, FieldType::U8),
    item("MSGOUT-NMEA_ID_GRS_USB", 0x209100d1, FieldType::U8),
    item("MSGOUT-NMEA_ID_GSA_I2C", 0x209100bf, FieldType::U8),
    item("MSGOUT-NMEA_ID_GSA_SPI", 0x209100c3, FieldType::U8),
    item("MSGOUT-NMEA_ID_GSA_UART1", 0x209100c0, FieldType::U8),
    item("MSGOUT-NMEA_ID_GSA_UART2", 0x209100c1, FieldType::U8),
    item("MSGOUT-NMEA_ID_GSA_USB", 0x209100c2, FieldType::U8),
    item("MSGOUT-NMEA_ID_GST_I2C", 0x209100d3, FieldType::U8),
    item("MSGOUT-NMEA_ID_GST_SPI", 0x209100d7, FieldType::U8),
    item("MSGOUT-NMEA_ID_GST_UART1", 0x209100d4, FieldType::U8),
    item("MSGOUT-NMEA_ID_GST_UART2", 0x209100d5, FieldType::U8),
    item("MSGOUT-NMEA_ID_GST_USB", 0x209100d6, FieldType::U8),
    item("MSGOUT-NMEA_ID_GSV_I2C", 0x209100c4, FieldType::U8),
    item("MSGOUT-NMEA_ID_GSV_SPI", 0x209100c8, FieldType::U8),
    item("MSGOUT-NMEA_ID_GSV_UART1", 0x209100c5, FieldType::U8),
    item("MSGOUT-NMEA_ID_GSV_UART2", 0x209100c6, FieldType::U8),
    item("MSGOUT-NMEA_ID_GSV_USB", 0x209100c7, FieldType::U8),
    item("MSGOUT-NMEA_ID_RMC_I2C", 0x209100ab, FieldType::U8),
    item("MSGOUT-NMEA_ID_RMC_SPI", 0x209100af, FieldType::U8),
    item("MSGOUT-NMEA_ID_RMC_UART1", 0x209100ac, FieldType::U8),
    item("MSGOUT-NMEA_ID_RMC_UART2", 0x209100ad, FieldType::U8),
    item("MSGOUT-NMEA_ID_RMC_USB", 0x209100ae, FieldType::U8),
    item("MSGOUT-NMEA_ID_VLW_I2C", 0x209100e7, FieldType::U8),
    item("MSGOUT-NMEA_ID_VLW_SPI", 0x209100eb, FieldType::U8),
    item("MSGOUT-NMEA_ID_VLW_UART1", 0x209100e8, FieldType::U8),
    item("MSGOUT-NMEA_ID_VLW_UART2", 0x209100e9, FieldType::U8),
    item("MSGOUT-NMEA_ID_VLW_USB", 0x209100ea, FieldType::U8),
    item("MSGOUT-NMEA_ID_VTG_I2C", 0x209100b0, FieldType::U8),
    item("MSGOUT-NMEA_ID_VTG_SPI", 0x209100b4, FieldType::U8),
    item("MSGOUT-NMEA_ID_VTG_UART1", 0x209100b1, FieldType::U8),
    item("MSGOUT-NMEA_ID_VTG_UART2", 0x209100b2, FieldType::U8),
    item("MSGOUT-NMEA_ID_VTG_USB", 0x209100b3, FieldType::U8),
    item("MSGOUT-NMEA_ID_ZDA_I2C", 0x209100d8, FieldType::U8),
    item("MSGOUT-NMEA_ID_ZDA_SPI", 0x209100dc, FieldType::U8),
    item("MSGOUT-NMEA_ID_ZDA_UART1", 0x209100d9, FieldType::U8),
    item("MSGOUT-NMEA_ID_ZDA_UART2", 0x209100da, FieldType::U8),
    item("MSGOUT-NMEA_ID_ZDA_USB", 0x209100db, FieldType::U8),
    item("MSGOUT-PUBX_ID_POLYP_I2C", 0x209100ec, FieldType::U8),
    item("MSGOUT-PUBX_ID_POLYP_SPI", 0x209100f0, FieldType::U8),
    item("MSGOUT-PUBX_ID_POLYP_UART1", 0x209100ed, FieldType::U8),
    item("MSGOUT-PUBX_ID_POLYP_UART2", 0x209100ee, FieldType::U8),
    item("MSGOUT-PUBX_ID_POLYP_USB", 0x209100ef, FieldType::U8),
    item("MSGOUT-PUBX_ID_POLYS_I2C", 0x209100f1, FieldType::U8),
    item("MSGOUT-PUBX_ID_POLYS_SPI", 0x209100f5, FieldType::U8),
    item("MSGOUT-PUBX_ID_POLYS_UART1", 0x209100f2, FieldType::U8),
    item("MSGOUT-PUBX_ID_POLYS_UART2", 0x209100f3, FieldType::U8),
    item("MSGOUT-PUBX_ID_POLYS_USB", 0x209100f4, FieldType::U8),
    item("MSGOUT-PUBX_ID_POLYT_I2C", 0x209100f6, FieldType::U8),
    item("MSGOUT-PUBX_ID_POLYT_SPI", 0x209100fa, FieldType::U8),
    item("MSGOUT-PUBX_ID_POLYT_UART1", 0x209100f7, FieldType::U8),
    item("MSGOUT-PUBX_ID_POLYT_UART2", 0x209100f8, FieldType::U8),
    item("MSGOUT-PUBX_ID_POLYT_USB", 0x209100f9, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1005_I2C", 0x209102bd, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1005_SPI", 0x209102c1, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1005_UART1", 0x209102be, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1005_UART2", 0x209102bf, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1005_USB", 0x209102c0, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1074_I2C", 0x2091035e, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1074_SPI", 0x20910362, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1074_UART1", 0x2091035f, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1074_UART2", 0x20910360, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1074_USB", 0x20910361, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1077_I2C", 0x209102cc, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1077_SPI", 0x209102d0, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1077_UART1", 0x209102cd, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1077_UART2", 0x209102ce, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1077_USB", 0x209102cf, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1087_I2C", 0x209102d1, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1084_SPI", 0x20910367, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1084_UART1", 0x20910364, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1084_UART2", 0x20910365, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1084_USB", 0x20910366, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1087_SPI", 0x209102d5, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1087_UART1", 0x209102d2, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1087_UART2", 0x209102d3, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1087_USB", 0x209102d4, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1094_I2C", 0x20910368, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1094_SPI", 0x2091036c, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1094_UART1", 0x20910369, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1094_UART2", 0x2091036a, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1094_USB", 0x2091036b, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1097_I2C", 0x20910318, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1097_SPI", 0x2091031c, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1097_UART1", 0x20910319, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1097_UART2", 0x2091031a, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1097_USB", 0x2091031b, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1124_I2C", 0x2091036d, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1124_SPI", 0x20910371, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1124_UART1", 0x2091036e, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1124_UART2", 0x2091036f, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1124_USB", 0x20910370, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1127_I2C", 0x209102d6, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1127_SPI", 0x209102da, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1127_UART1", 0x209102d7, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1127_UART2", 0x209102d8, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1127_USB", 0x209102d9, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1230_I2C", 0x20910303, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1230_SPI", 0x20910307, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1230_UART1", 0x20910304, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1230_UART2", 0x20910305, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE1230_USB", 0x20910306, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE4072_0_I2C", 0x209102fe, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE4072_0_SPI", 0x20910302, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE4072_0_UART1", 0x209102ff, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE4072_0_UART2", 0x20910300, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE4072_0_USB", 0x20910301, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE4072_1_I2C", 0x20910381, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE4072_1_SPI", 0x20910385, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE4072_1_UART1", 0x20910382, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE4072_1_UART2", 0x20910383, FieldType::U8),
    item("MSGOUT-RTCM_3X_TYPE4072_1_USB", 0x20910384, FieldType::U8),
    item("MSGOUT-UBX_LOG_INFO_I2C", 0x20910259, FieldType::U8),
    item("MSGOUT-UBX_LOG_INFO_SPI", 0x2091025d, FieldType::U8),
    item("MSGOUT-UBX_LOG_INFO_UART1", 0x2091025a, FieldType::U8),
    item("MSGOUT-UBX_LOG_INFO_UART2", 0x2091025b, FieldType::U8),
    item("MSGOUT-UBX_LOG_INFO_USB", 0x2091025c, FieldType::U8),
    item("MSGOUT-UBX_MON_COMMS_I2C", 0x2091034f, FieldType::U8),
    item("MSGOUT-UBX_MON_COMMS_SPI", 0x20910353, FieldType::U8),
    item("MSGOUT-UBX_MON_COMMS_UART1", 0x20910350, FieldType::U8),
    item("MSGOUT-UBX_MON_COMMS_UART2", 0x20910351, FieldType::U8),
    item("MSGOUT-UBX_MON_COMMS_USB", 0x20910352, FieldType::U8),
    item("MSGOUT-UBX_MON_HW2_I2C", 0x209101b9, FieldType::U8),
    item("MSGOUT-UBX_MON_HW2_SPI", 0x209101bd, FieldType::U8),
    item("MSGOUT-UBX_MON_HW2_UART1", 0x209101ba, FieldType::U8),
    item("MSGOUT-UBX_MON_HW2_UART2", 0x209101bb, FieldType::U8),
    item("MSGOUT-UBX_MON_HW2_USB", 0x209101bc, FieldType::U8),
    item("MSGOUT-UBX_MON_HW3_I2C", 0x20910354, FieldType::U8),
    item("MSGOUT-UBX_MON_HW3_SPI", 0x20910358, FieldType::U8),
    item("MSGOUT-UBX_MON_HW3_UART1", 0x20910355, FieldType::U8),
    item("MSGOUT-UBX_MON_HW3_UART2", 0x20910356, FieldType::U8),
    item("MSGOUT-UBX_MON_HW3_USB", 0x20910357, FieldType::U8),
    item("MSGOUT-UBX_MON_HW_I2C", 0x209101b4, FieldType::U8),
    item("MSGOUT-UBX_MON_HW_SPI", 0x209101b8, FieldType::U8),
    item("MSGOUT-UBX_MON_HW_UART1", 0x209101b5, FieldType::U8),
    item("MSGOUT-UBX_MON_HW_UART2", 0x209101b6, FieldType::U8),
    item("MSGOUT-UBX_MON_HW_USB", 0x209101b7, FieldType::U8),
    item("MSGOUT-UBX_MON_IO_I2C", 0x209101a5, FieldType::U8),
    item("MSGOUT-UBX_MON_IO_SPI", 0x209101a9, FieldType::U8),
    item("MSGOUT-UBX_MON_IO_UART1", 0x209101a6, FieldType::U8),
    item("MSGOUT-UBX_MON_IO_UART2", 0x209101a7, FieldType::U8),
    item("MSGOUT-UBX_MON_IO_USB", 0x209101a8, FieldType::U8),
    item("MSGOUT-UBX_MON_MSGPP_I2C", 0x20910196, FieldType::U8),
    item("MSGOUT-UBX_MON_MSGPP_SPI", 0x2091019a, FieldType::U8),
    item("MSGOUT-UBX_MON_MSGPP_UART1", 0x20910197, FieldType::U8),
    item("MSGOUT-UBX_MON_MSGPP_UART2", 0x20910198, FieldType::U8),
    item("MSGOUT-UBX_MON_MSGPP_USB", 0x20910199, FieldType::U8),
    item("MSGOUT-UBX_MON_RF_I2C", 0x20910359, FieldType::U8),
    item("MSGOUT-UBX_MON_RF_SPI", 0x2091035d, FieldType::U8),
    item("MSGOUT-UBX_MON_RF_UART1", 0x2091035a, FieldType::U8),
    item("MSGOUT-UBX_MON_RF_UART2", 0x2091035b, FieldType::U8),
    item("MSGOUT-UBX_MON_RF_USB", 0x2091035c, FieldType::U8),
    item("MSGOUT-UBX_MON_RXBUF_I2C", 0x209101a0, FieldType::U8),
    item("MSGOUT-UBX_MON_RXBUF_SPI", 0x209101a4, FieldType::U8),
    item("MSGOUT-UBX_MON_RXBUF_UART1", 0x209101a1, FieldType::U8),
    item("MSGOUT-UBX_MON_RXBUF_UART2", 0x209101a2, FieldType::U8),
    item("MSGOUT-UBX_MON_RXBUF_USB", 0x209101a3, FieldType::U8),
    item("MSGOUT-UBX_MON_RXR_I2C", 0x20910187, FieldType::U8),
    item("MSGOUT-UBX_MON_RXR_SPI", 0x2091018b, FieldType::U8),
    item("MSGOUT-UBX_MON_RXR_UART1", 0x20910188, FieldType::U8),
    item("MSGOUT-UBX_MON_RXR_UART2", 0x20910189, FieldType::U8),
    item("MSGOUT-UBX_MON_RXR_USB", 0x2091018a, FieldType::U8),
    item("MSGOUT-UBX_MON_TXBUF_I2C", 0x2091019b, FieldType::U8),
    item("MSGOUT-UBX_MON_TXBUF_SPI", 0x2091019f, FieldType::U8),
    item("MSGOUT-UBX_MON_TXBUF_UART1", 0x2091019c, FieldType::U8),
    item("MSGOUT-UBX_MON_TXBUF_UART2", 0x2091019d, FieldType::U8),
    item("MSGOUT-UBX_MON_TXBUF_USB", 0x2091019e, FieldType::U8),
    item("MSGOUT-UBX_NAV_CLOCK_I2C", 0x20910065, FieldType::U8),
    item("MSGOUT-UBX_NAV_CLOCK_SPI", 0x20910069, FieldType::U8),
    item("MSGOUT-UBX_NAV_CLOCK_UART1", 0x20910066, FieldType::U8),
    item("MSGOUT-UBX_NAV_CLOCK_UART2", 0x20910067, FieldType::U8),
    item("MSGOUT-UBX_NAV_CLOCK_USB", 0x20910068, FieldType::U8),
    item("MSGOUT-UBX_NAV_DOP_I2C", 0x20910038, FieldType::U8),
    item("MSGOUT-UBX_NAV_DOP_SPI", 0x2091003c, FieldType::U8),
    item("MSGOUT-UBX_NAV_DOP_UART1", 0x20910039, FieldType::U8),
    item("MSGOUT-UBX_NAV_DOP_UART2", 0x2091003a, FieldType::U8),
    item("MSGOUT-UBX_NAV_DOP_USB", 0x2091003b, FieldType::U8),
    item("MSGOUT-UBX_NAV_EOE_I2C", 0x2091015f, FieldType::U8),
    item("MSGOUT-UBX_NAV_EOE_SPI", 0x20910163, FieldType::U8),
    item("MSGOUT-UBX_NAV_EOE_UART1", 0x20910160, FieldType::U8),
    item("MSGOUT-UBX_NAV_EOE_UART2", 0x20910161, FieldType::U8),
    item("MSGOUT-UBX_NAV_EOE_USB", 0x20910162, FieldType::U8),
    item("MSGOUT-UBX_NAV_GEOFENCE_I2C", 0x209100a1, FieldType::U8),
    item("MSGOUT-UBX_NAV_GEOFENCE_SPI", 0x209100a5, FieldType::U8),
    item("MSGOUT-UBX_NAV_GEOFENCE_UART1", 0x209100a2, FieldType::U8),
    item("MSGOUT-UBX_NAV_GEOFENCE_UART2", 0x209100a3, FieldType::U8),
    item("MSGOUT-UBX_NAV_GEOFENCE_USB", 0x209100a4, FieldType::U8),
    item("MSGOUT-UBX_NAV_HPPOSECEF_I2C", 0x2091002e, FieldType::U8),
    item("MSGOUT-UBX_NAV_HPPOSECEF_SPI", 0x20910032, FieldType::U8),
    item("MSGOUT-UBX_NAV_HPPOSECEF_UART1", 0x2091002f, FieldType::U8),
    item("MSGOUT-UBX_NAV_HPPOSECEF_UART2", 0x20910030, FieldType::U8),
    item("MSGOUT-UBX_NAV_HPPOSECEF_USB", 0x20910031, FieldType::U8),
    item("MSGOUT-UBX_NAV_HPPOSLLH_I2C", 0x20910033, FieldType::U8),
    item("MSGOUT-UBX_NAV_HPPOSLLH_SPI", 0x20910037, FieldType::U8),
    item("MSGOUT-UBX_NAV_HPPOSLLH_UART1", 0x20910034, FieldType::U8),
    item("MSGOUT-UBX_NAV_HPPOSLLH_UART2", 0x20910035, FieldType::U8),
    item("MSGOUT-UBX_NAV_HPPOSLLH_USB", 0x20910036, FieldType::U8),
    item("MSGOUT-UBX_NAV_ODO_I2C", 0x2091007e, FieldType::U8),
    item("MSGOUT-UBX_NAV_ODO_SPI", 0x20910082, FieldType::U8),
    item("MSGOUT-UBX_NAV_ODO_UART1", 0x2091007f, FieldType::U8),
    item("MSGOUT-UBX_NAV_ODO_UART2", 0x20910080, FieldType::U8),
    item("MSGOUT-UBX_NAV_ODO_USB", 0x20910081, FieldType::U8),
    item("MSGOUT-UBX_NAV_ORB_I2C", 0x20910010, FieldType::U8),
    item("MSGOUT-UBX_NAV_ORB_SPI", 0x20910014, FieldType::U8),
    item("MSGOUT-UBX_NAV_ORB_UART1", 0x20910011, FieldType::U8),
    item("MSGOUT-UBX_NAV_ORB_UART2", 0x20910012, FieldType::U8),
    item("MSGOUT-UBX_NAV_ORB_USB", 0x20910013, FieldType::U8),
    item("MSGOUT-UBX_NAV_POSECEF_I2C", 0x20910024, FieldType::U8),
    item("MSGOUT-UBX_NAV_POSECEF_SPI", 0x20910028, FieldType::U8),
    item("MSGOUT-UBX_NAV_POSECEF_UART1", 0x20910025, FieldType::U8),
    item("MSGOUT-UBX_NAV_POSECEF_UART2", 0x20910026, FieldType::U8),
    item("MSGOUT-UBX_NAV_POSECEF_USB", 0x20910027, FieldType::U8),
    item("MSGOUT-UBX_NAV_POSLLH_I2C", 0x20910029, FieldType::U8),
    item("MSGOUT-UBX_NAV_POSLLH_SPI", 0x2091002d, FieldType::U8),
    item("MSGOUT-UBX_NAV_POSLLH_UART1", 0x2091002a, FieldType::U8),
    item("MSGOUT-UBX_NAV_POSLLH_UART2", 0x2091002b, FieldType::U8),
    item("MSGOUT-UBX_NAV_POSLLH_USB", 0x2091002c, FieldType::U8),
    item("MSGOUT-UBX_NAV_PVT_I2C", 0x20910006, FieldType::U8),
    item("MSGOUT-UBX_NAV_PVT_SPI", 0x2091000a, FieldType::U8),
    item("MSGOUT-UBX_NAV_PVT_UART1", 0x20910007, FieldType::U8),
    item("MSGOUT-UBX_NAV_PVT_UART2", 0x20910008, FieldType::U8),
    item("MSGOUT-UBX_NAV_PVT_USB", 0x20910009, FieldType::U8),
    item("MSGOUT-UBX_NAV_RELPOSNED_I2C", 0x2091008d, FieldType::U8),
    item("MSGOUT-UBX_NAV_RELPOSNED_SPI", 0x20910091, FieldType::U8),
    item("MSGOUT-UBX_NAV_RELPOSNED_UART1", 0x2091008e, FieldType::U8),
    item("MSGOUT-UBX_NAV_RELPOSNED_UART2", 0x2091008f, FieldType::U8),
    item("MSGOUT-UBX_NAV_RELPOSNED_USB", 0x20910090, FieldType::U8),
    item("MSGOUT-UBX_NAV_SAT_I2C", 0x20910015, FieldType::U8),
    item("MSGOUT-UBX_NAV_SAT_SPI", 0x20910019, FieldType::U8),
    item("MSGOUT-UBX_NAV_SAT_UART1", 0x20910016, FieldType::U8),
    item("MSGOUT-UBX_NAV_SAT_UART2", 0x20910017, FieldType::U8),
    item("MSGOUT-UBX_NAV_SAT_USB", 0x20910018, FieldType::U8),
    item("MSGOUT-UBX_NAV_SBAS_I2C", 0x2091006a, FieldType::U8),
    item("MSGOUT-UBX_NAV_SBAS_SPI", 0x2091006e, FieldType::U8),
    item("MSGOUT-UBX_NAV_SBAS_UART1", 0x2091006b, FieldType::U8),
    item("MSGOUT-UBX_NAV_SBAS_UART2", 0x2091006c, FieldType::U8),
    item("MSGOUT-UBX_NAV_SBAS_USB", 0x2091006d, FieldType::U8),
    item("MSGOUT-UBX_NAV_SIG_I2C", 0x20910345, FieldType::U8),
    item("MSGOUT-UBX_NAV_SIG_SPI", 0x20910349, FieldType::U8),
    item("MSGOUT-UBX_NAV_SIG_UART1", 0x20910346, FieldType::U8),
    item("MSGOUT-UBX_NAV_SIG_UART2", 0x20910347, FieldType::U8),
    item("MSGOUT-UBX_NAV_SIG_USB", 0x20910348, FieldType::U8),
    item("MSGOUT-UBX_NAV_STATUS_I2C", 0x2091001a, FieldType::U8),
    item("MSGOUT-UBX_NAV_STATUS_SPI", 0x2091001e, FieldType::U8),
    item("MSGOUT-UBX_NAV_STATUS_UART1", 0x2091001b, FieldType::U8),
    item("MSGOUT-UBX_NAV_STATUS_UART2", 0x2091001c, FieldType::U8),
    item("MSGOUT-UBX_NAV_STATUS_USB", 0x2091001d, FieldType::U8),
    item("MSGOUT-UBX_NAV_SVIN_I2C", 0x20910088, FieldType::U8),
    item("MSGOUT-UBX_NAV_SVIN_SPI", 0x2091008c, FieldType::U8),
    item("MSGOUT-UBX_NAV_SVIN_UART1", 0x20910089, FieldType::U8),
    item("MSGOUT-UBX_NAV_SVIN_UART2", 0x2091008a, FieldType::U8),
    item("MSGOUT-UBX_NAV_SVIN_USB", 0x2091008b, FieldType::U8),
    item("MSGOUT-UBX_NAV_TIMEBDS_I2C", 0x20910051, FieldType::U8),
    item("MSGOUT-UBX_NAV_TIMEBDS_SPI", 0x20910055, FieldType::U8),
    item("MSGOUT-UBX_NAV_TIMEBDS_UART1", 0x20910052, FieldType::U8),
    item("MSGOUT-UBX_NAV_TIMEBDS_UART2", 0x20910053, FieldType::U8),
    item("MSGOUT-UBX_NAV_TIMEBDS_USB", 0x20910054, FieldType::U8),
    item("MSGOUT-UBX_NAV_TIMEGAL_I2C", 0x20910056, FieldType::U8),
    item("MSGOUT-UBX_NAV_TIMEGAL_SPI", 0x2091005a, FieldType::U8),
    item("MSGOUT-UBX_NAV_TIMEGAL_UART1", 0x20910057, FieldType::U8),
    item("MSGOUT-UBX_NAV_TIMEGAL_UART2", 0x20910058, FieldType::U8),
    item("MSGOUT-UBX_NAV_TIMEGAL_USB", 0x20910059, FieldType::U8),
    item("MSGOUT-UBX_NAV_TIMEGLO_I2C", 0x2091004c, FieldType::U8),
    item("MSGOUT-UBX_NAV_TIMEGLO_SPI", 0x20910050, FieldType::U8),
    item("MSGOUT-UBX_NAV_TIMEGLO_UART1", 0x2091004d, FieldType::U8),
    item("MSGOUT-UBX_NAV_TIMEGLO_UART2", 0x2091004e, FieldType::U8),
    item("MSGOUT-UBX_NAV_TIMEGLO_USB", 0x2091004f, FieldType::U8),
    item("MSGOUT-UBX_NAV_TIMEGPS_I2C", 0x20910047, FieldType::U8),
    item("MSGOUT-UBX_NAV_TIMEGPS_SPI", 0x2091004b, FieldType::U8),
    item("MSGOUT-UBX_NAV_TIMEGPS_UART1", 0x20910048, FieldType::U8),
    item("MSGOUT-UBX_NAV_TIMEGPS_UART2", 0x20910049, FieldType::U8),
    item("MSGOUT-UBX_NAV_TIMEGPS_USB", 0x2091004a, FieldType::U8),
    item("MSGOUT-UBX_NAV_TIMELS_I2C", 0x20910060, FieldType::U8),
    item("MSGOUT-UBX_NAV_TIMELS_SPI", 0x20910064, FieldType::U8),
    item("MSGOUT-UBX_NAV_TIMELS_UART1", 0x20910061, FieldType::U8),
    item("MSGOUT-UBX_NAV_TIMELS_UART2", 0x20910062, FieldType::U8),
    item("MSGOUT-UBX_NAV_TIMELS_USB", 0x20910063, FieldType::U8),
    item("MSGOUT-UBX_NAV_TIMEUTC_I2C", 0x2091005b, FieldType::U8),
    item("MSGOUT-UBX_NAV_TIMEUTC_SPI", 0x2091005f, FieldType::U8),
    item("MSGOUT-UBX_NAV_TIMEUTC_UART1", 0x2091005c, FieldType::U8),
    item("MSGOUT-UBX_NAV_TIMEUTC_UART2", 0x2091005d, FieldType::U8),
    item("MSGOUT-UBX_NAV_TIMEUTC_USB", 0x2091005e, FieldType::U8),
    item("MSGOUT-UBX_NAV_VELECEF_I2C", 0x2091003d, FieldType::U8),
    item("MSGOUT-UBX_NAV_VELECEF_SPI", 0x20910041, FieldType::U8),
    item("MSGOUT-UBX_NAV_VELECEF_UART1", 0x2091003e, FieldType::U8),
    item("MSGOUT-UBX_NAV_VELECEF_UART2", 0x2091003f, FieldType::U8),
    item("MSGOUT-UBX_NAV_VELECEF_USB", 0x20910040, FieldType::U8),
    item("MSGOUT-UBX_NAV_VELNED_I2C", 0x20910042, FieldType::U8),
    item("MSGOUT-UBX_NAV_VELNED_SPI", 0x20910046, FieldType::U8),
    item("MSGOUT-UBX_NAV_VELNED_UART1", 0x20910043, FieldType::U8),
    item("MSGOUT-UBX_NAV_VELNED_UART2", 0x20910044, FieldType::U8),
    item("MSGOUT-UBX_NAV_VELNED_USB", 0x20910045, FieldType::U8),
    item("MSGOUT-UBX_RXM_MEASX_I2C", 0x20910204, FieldType::U8),
    item("MSGOUT-UBX_RXM_MEASX_SPI", 0x20910208, FieldType::U8),
    item("MSGOUT-UBX_RXM_MEASX_UART1", 0x20910205, FieldType::U8),
    item("MSGOUT-UBX_RXM_MEASX_UART2", 0x20910206, FieldType::U8),
    item("MSGOUT-UBX_RXM_MEASX_USB", 0x20910207, FieldType::U8),
    item("MSGOUT-UBX_RXM_RAWX_I2C", 0x209102a4, FieldType::U8),
    item("MSGOUT-UBX_RXM_RAWX_SPI", 0x209102a8, FieldType::U8),
    item("MSGOUT-UBX_RXM_RAWX_UART1", 0x209102a5, FieldType::U8),
    item("MSGOUT-UBX_RXM_RAWX_UART2", 0x209102a6, FieldType::U8),
    item("MSGOUT-UBX_RXM_RAWX_USB", 0x209102a7, FieldType::U8),
    item("MSGOUT-UBX_RXM_RLM_I2C", 0x2091025e, FieldType::U8),
    item("MSGOUT-UBX_RXM_RLM_SPI", 0x20910262, FieldType::U8),
    item("MSGOUT-UBX_RXM_RLM_UART1", 0x2091025f, FieldType::U8),
    item("MSGOUT-UBX_RXM_RLM_UART2", 0x20910260, FieldType::U8),
    item("MSGOUT-UBX_RXM_RLM_USB", 0x20910261, FieldType::U8),
    item("MSGOUT-UBX_RXM_RTCM_I2C", 0x20910268, FieldType::U8),
    item("MSGOUT-UBX_RXM_RTCM_SPI", 0x2091026c, FieldType::U8),
    item("MSGOUT-UBX_RXM_RTCM_UART1", 0x20910269, FieldType::U8),
    item("MSGOUT-UBX_RXM_RTCM_UART2", 0x2091026a, FieldType::U8),
    item("MSGOUT-UBX_RXM_RTCM_USB", 0x2091026b, FieldType::U8),
    item("MSGOUT-UBX_RXM_SFRBX_I2C", 0x20910231, FieldType::U8),
    item("MSGOUT-UBX_RXM_SFRBX_SPI", 0x20910235, FieldType::U8),
    item("MSGOUT-UBX_RXM_SFRBX_UART1", 0x20910232, FieldType::U8),
    item("MSGOUT-UBX_RXM_SFRBX_UART2", 0x20910233, FieldType::U8),
    item("MSGOUT-UBX_RXM_SFRBX_USB", 0x20910234, FieldType::U8),
    item("MSGOUT-UBX_TIM_SVIN_I2C", 0x20910097, FieldType::U8),
    item("MSGOUT-UBX_TIM_SVIN_SPI", 0x2091009b, FieldType::U8),
    item("MSGOUT-UBX_TIM_SVIN_UART1", 0x20910098, FieldType::U8),
    item("MSGOUT-UBX_TIM_SVIN_UART2", 0x20910099, FieldType::U8),
    item("MSGOUT-UBX_TIM_SVIN_USB", 0x2091009a, FieldType::U8),
    item("MSGOUT-UBX_TIM_TM2_I2C", 0x20910178, FieldType::U8),
    item("MSGOUT-UBX_TIM_TM2_SPI", 0x2091017c, FieldType::U8),
    item("MSGOUT-UBX_TIM_TM2_UART1", 0x20910179, FieldType::U8),
    item("MSGOUT-UBX_TIM_TM2_UART2", 0x2091017a, FieldType::U8),
    item("MSGOUT-UBX_TIM_TM2_USB", 0x2091017b, FieldType::U8),
    item("MSGOUT-UBX_TIM_TP_I2C", 0x2091017d, FieldType::U8),
    item("MSGOUT-UBX_TIM_TP_SPI", 0x20910181, FieldType::U8),
    item("MSGOUT-UBX_TIM_TP_UART1", 0x2091017e, FieldType::U8),
    item("MSGOUT-UBX_TIM_TP_UART2", 0x2091017f, FieldType::U8),
    item("MSGOUT-UBX_TIM_TP_USB", 0x20910180, FieldType::U8),
    item("MSGOUT-UBX_TIM_VRFY_I2C", 0x20910092, FieldType::U8),
    item("MSGOUT-UBX_TIM_VRFY_SPI", 0x20910096, FieldType::U8),
    item("MSGOUT-UBX_TIM_VRFY_UART1", 0x20910093, FieldType::U8),
    item("MSGOUT-UBX_TIM_VRFY_UART2", 0x20910094, FieldType::U8),
    item("MSGOUT-UBX_TIM_VRFY_USB", 0x20910095, FieldType::U8),
    item("NAVHPG-DGNSSMODE", 0x20140011, FieldType::U8),
    item("NAVSPG-FIXMODE", 0x20110011, FieldType::U8),
    item("NAVSPG-INIFIX3D", 0x10110013, FieldType::U8),
    item("NAVSPG-WKNROLLOVER", 0x30110017, FieldType::U16),
    item("NAVSPG-USE_PPP", 0x10110019, FieldType::U8),
    item("NAVSPG-UTCSTANDARD", 0x2011001c, FieldType::U8),
    item("NAVSPG-DYNMODEL", 0x20110021, FieldType::U8),
    item("NAVSPG-ACKAIDING", 0x10110025, FieldType::U8),
    item("NAVSPG-USE_USRDAT", 0x10110061, FieldType::U8),
    item("NAVSPG-USRDAT_MAJA", 0x50110062, FieldType::F64),
    item("NAVSPG-USRDAT_FLAT", 0x50110063, FieldType::F64),
    item("NAVSPG-USRDAT_DX", 0x40110064, FieldType::F32),
    item("NAVSPG-USRDAT_DY", 0x40110065, FieldType::F32),
    item("NAVSPG-USRDAT_DZ", 0x40110066, FieldType::F32),
    item("NAVSPG-USRDAT_ROTX", 0x40110067, FieldType::F32),
    item("NAVSPG-USRDAT_ROTY", 0x40110068, FieldType::F32),
    item("NAVSPG-USRDAT_ROTZ", 0x40110069, FieldType::F32),
    item("NAVSPG-USRDAT_SCALE", 0x4011006a, FieldType::F32),
    item("NAVSPG-INFIL_MINSVS", 0x201100a1, FieldType::U8),
    item("NAVSPG-INFIL_MAXSVS", 0x201100a2, FieldType::U8),
    item("NAVSPG-INFIL_MINCNO", 0x201100a3, FieldType::U8),
    item("NAVSPG-INFIL_MINELEV", 0x201100a4, FieldType::I8),
    item("NAVSPG-INFIL_NCNOTHRS", 0x201100aa, FieldType::U8),
    item("NAVSPG-INFIL_CNOTHRS", 0x201100ab, FieldType::U8),
    item("NAVSPG-OUTFIL_PDOP", 0x301100b1, FieldType::U16),
    item("NAVSPG-OUTFIL_TDOP", 0x301100b2, FieldType::U16),
    item("NAVSPG-OUTFIL_PACC", 0x301100b3, FieldType::U16),
    item("NAVSPG-OUTFIL_TACC", 0x301100b4, FieldType::U16),
    item("NAVSPG-OUTFIL_FACC", 0x301100b5, FieldType::U16),
    item("NAVSPG-CONSTR_ALT", 0x401100c1, FieldType::I32),
    item("NAVSPG-CONSTR_ALTVAR", 0x401100c2, FieldType::U32),
    item("NAVSPG-CONSTR_DGNSSTO", 0x201100c4, FieldType::U8),
    item("NMEA-PROTVER", 0x20930001, FieldType::U8),
    item("NMEA-MAXSVS", 0x20930002, FieldType::U8),
    item("NMEA-COMPAT", 0x10930003, FieldType::U8),
    item("NMEA-CONSIDER", 0x10930004, FieldType::U8),
    item("NMEA-LIMIT82", 0x10930005, FieldType::U8),
    item("NMEA-HIGHPREC", 0x10930006, FieldType::U8),
    item("NMEA-SVNUMBERING", 0x20930007, FieldType::U8),
    item("NMEA-FILT_GPS", 0x10930011, FieldType::U8),
    item("NMEA-FILT_SBAS", 0x10930012, FieldType::U8),
    item("NMEA-FILT_QZSS", 0x10930015, FieldType::U8),
    item("NMEA-FILT_GLO", 0x10930016, FieldType::U8),
    item("NMEA-FILT_BDS", 0x10930017, FieldType::U8),
    item("NMEA-OUT_INVFIX", 0x10930021, FieldType::U8),
    item("NMEA-OUT_MSKFIX", 0x10930022, FieldType::U8),
    item("NMEA-OUT_INVTIME", 0x10930023, FieldType::U8),
    item("NMEA-OUT_INVDATE", 0x10930024, FieldType::U8),
    item("NMEA-OUT_ONLYGPS", 0x10930025, FieldType::U8),
    item("NMEA-OUT_FROZENCOG", 0x10930026, FieldType::U8),
    item("NMEA-MAINTALKERID", 0x20930031, FieldType::U8),
    item("NMEA-GSVTALKERID", 0x20930032, FieldType::U8),
    item("NMEA-BDSTALKERID", 0x30930033, FieldType::U16),
    item("ODO-USE_ODO", 0x10220001, FieldType::U8),
    item("ODO-USE_COG", 0x10220002, FieldType::U8),
    item("ODO-OUTLPVEL", 0x10220003, FieldType::U8),
    item("ODO-OUTLPCOG", 0x10220004, FieldType::U8),
    item("ODO-PROFILE", 0x20220005, FieldType::U8),
    item("ODO-COGMAXSPEED", 0x20220021, FieldType::U8),
    item("ODO-COGMAXPOSACC", 0x20220022, FieldType::U8),
    item("ODO-COGLPGAIN", 0x20220032, FieldType::U8),
    item("ODO-VELLPGAIN", 0x20220031, FieldType::U8),
    item("RATE-MEAS", 0x30210001, FieldType::U16),
    item("RATE-NAV", 0x30210002, FieldType::U16),
    item("RATE-TIMEREF", 0x20210003, FieldType::U8),
    item("RINV-DUMP", 0x10c70001, FieldType::U8),
    item("RINV-BINARY", 0x10c70002, FieldType::U8),
    item("RINV-DATA_SIZE", 0x20c70003, FieldType::U8),
    item("RINV-CHUNK0", 0x50c70004, FieldType::U64),
    item("RINV-CHUNK1", 0x50c70005, FieldType::U64),
    item("RINV-CHUNK2", 0x50c70006, FieldType::U64),
    item("RINV-CHUNK3", 0x50c70007, FieldType::U64),
    item("SBAS-USE_TESTMODE", 0x10360002, FieldType::U8),
    item("SBAS-USE_RANGING", 0x10360003, FieldType::U8),
    item("SBAS-USE_DIFFCORR", 0x10360004, FieldType::U8),
    item("SBAS-USE_INTEGRITY", 0x10360005, FieldType::U8),
    item("SBAS-PRNSCANMASK", 0x50360006, FieldType::U64),
    item("SIGNAL-GPS_ENA", 0x1031001f, FieldType::U8),
    item("SIGNAL-GPS_L1CA_ENA", 0x10310001, FieldType::U8),
    item("SIGNAL-GPS_L2C_ENA", 0x10310003, FieldType::U8),
    item("SIGNAL-SBAS_ENA", 0x10310020, FieldType::U8),
    item("SIGNAL-SBAS_L1CA_ENA", 0x10310005, FieldType::U8),
    item("SIGNAL-GAL_ENA", 0x10310021, FieldType::U8),
    item("SIGNAL-GAL_E1_ENA", 0x10310007, FieldType::U8),
    item("SIGNAL-GAL_E5B_ENA", 0x1031000a, FieldType::U8),
    item("SIGNAL-BDS_ENA", 0x10310022, FieldType::U8),
    item("SIGNAL-BDS_B1_ENA", 0x1031000d, FieldType::U8),
    item("SIGNAL-BDS_B2_ENA", 0x1031000e, FieldType::U8),
    item("SIGNAL-QZSS_ENA", 0x10310024, FieldType::U8),
    item("SIGNAL-QZSS_L1CA_ENA", 0x10310012, FieldType::U8),
    item("SIGNAL-QZSS_L1S_ENA", 0x10310014, FieldType::U8),
    item("SIGNAL-QZSS_L2C_ENA", 0x10310015, FieldType::U8),
    item("SIGNAL-GLO_ENA", 0x10310025, FieldType::U8),
    item("SIGNAL-GLO_L1_ENA", 0x10310018, FieldType::U8),
    item("SIGNAL-GLO_L2_ENA", 0x1031001a, FieldType::U8),
    item("SPI-MAXFF", 0x20640001, FieldType::U8),
    item("SPI-CPOLARITY", 0x10640002, FieldType::U8),
    item("SPI-CPHASE", 0x10640003, FieldType::U8),
    item("SPI-EXTENDEDTIMEOUT", 0x10640005, FieldType::U8),
    item("SPI-ENABLED", 0x10640006, FieldType::U8),
    item("SPIINPROT-UBX", 0x10790001, FieldType::U8),
    item("SPIINPROT-NMEA", 0x10790002, FieldType::U8),
    item("SPIINPROT-RTCM2X", 0x10790003, FieldType::U8),
    item("SPIINPROT-RTCM3X", 0x10790004, FieldType::U8),
    item("SPIOUTPROT-UBX", 0x107a0001, FieldType::U8),
    item("SPIOUTPROT-NMEA", 0x107a0002, FieldType::U8),
    item("SPIOUTPROT-RTCM3X", 0x107a0004, FieldType::U8),
    item("TMODE-MODE", 0x20030001, FieldType::U8),
    item("TMODE-POS_TYPE", 0x20030002, FieldType::U8),
    item("TMODE-ECEF_X", 0x40030003, FieldType::I32),
    item("TMODE-ECEF_Y", 0x40030004, FieldType::I32),
    item("TMODE-ECEF_Z", 0x40030005, FieldType::I32),
    item("TMODE-ECEF_X_HP", 0x20030006, FieldType::I8),
    item("TMODE-ECEF_Y_HP", 0x20030007, FieldType::I8),
    item("TMODE-ECEF_Z_HP", 0x20030008, FieldType::I8),
    item("TMODE-LAT", 0x40030009, FieldType::I32),
    item("TMODE-LON", 0x4003000a, FieldType::I32),
    item("TMODE-HEIGHT", 0x4003000b, FieldType::I32),
    item("TMODE-LAT_HP", 0x2003000c, FieldType::I8),
    item("TMODE-LON_HP", 0x2003000d, FieldType::I8),
    item("TMODE-HEIGHT_HP", 0x2003000e, FieldType::I8),
    item("TMODE-FIXED_POS_ACC", 0x4003000f, FieldType::U32),
    item("TMODE-SVIN_MIN_DUR", 0x40030010, FieldType::U32),
    item("TMODE-SVIN_ACC_LIMIT", 0x40030011, FieldType::U32),
    item("TP-PULSE_DEF", 0x20050023, FieldType::U8),
    item("TP-PULSE_LENGTH_DEF", 0x20050030, FieldType::U8),
    item("TP-ANT_CABLEDELAY", 0x30050001, FieldType::I16),
    item("TP-PERIOD_TP1", 0x40050002, FieldType::U32),
    item("TP-PERIOD_LOCK_TP1", 0x40050003, FieldType::U32),
    item("TP-FREQ_TP1", 0x40050024, FieldType::U32),
    item("TP-FREQ_LOCK_TP1", 0x40050025, FieldType::U32),
    item("TP-LEN_TP1", 0x40050004, FieldType::U32),
    item("TP-LEN_LOCK_TP1", 0x40050005, FieldType::U32),
    item("TP-DUTY_TP1", 0x5005002a, FieldType::F64),
    item("TP-DUTY_LOCK_TP1", 0x5005002b, FieldType::F64),
    item("TP-USER_DELAY_TP1", 0x40050006, FieldType::I32),
    item("TP-TP1_ENA", 0x10050007, FieldType::U8),
    item("TP-SYNC_GNSS_TP1", 0x10050008, FieldType::U8),
    item("TP-USE_LOCKED_TP1", 0x10050009, FieldType::U8),
    item("TP-ALIGN_TO_TOW_TP1", 0x1005000a, FieldType::U8),
    item("TP-POL_TP1", 0x1005000b, FieldType::U8),
    item("TP-TIMEGRID_TP1", 0x2005000c, FieldType::U8),
    item("TP-PERIOD_TP2", 0x4005000d, FieldType::U32),
    item("TP-PERIOD_LOCK_TP2", 0x4005000e, FieldType::U32),
    item("TP-FREQ_TP2", 0x40050026, FieldType::U32),
    item("TP-FREQ_LOCK_TP2", 0x40050027, FieldType::U32),
    item("TP-LEN_TP2", 0x4005000f, FieldType::U32),
    item("TP-LEN_LOCK_TP2", 0x40050010, FieldType::U32),
    item("TP-DUTY_TP2", 0x5005002c, FieldType::F64),
    item("TP-DUTY_LOCK_TP2", 0x5005002d, FieldType::F64),
    item("TP-USER_DELAY_TP2", 0x40050011, FieldType::I32),
    item("TP-TP2_ENA", 0x10050012, FieldType::U8),
    item("TP-SYNC_GNSS_TP2", 0x10050013, FieldType::U8),
    item("TP-USE_LOCKED_TP2", 0x10050014, FieldType::U8),
    item("TP-ALIGN_TO_TOW_TP2", 0x10050015, FieldType::U8),
    item("TP-POL_TP2", 0x10050016, FieldType::U8),
    item("TP-TIMEGRID_TP2", 0x20050017, FieldType::U8),
    item("UART1-BAUDRATE", 0x40520001, FieldType::U32),
    item("UART1-STOPBITS", 0x20520002, FieldType::U8),
    item("UART1-DATABITS", 0x20520003, FieldType::U8),
    item("UART1-PARITY", 0x20520004, FieldType::U8),
    item("UART1-ENABLED", 0x10520005, FieldType::U8),
    item("UART1INPROT-UBX", 0x10730001, FieldType::U8),
    item("UART1INPROT-NMEA", 0x10730002, FieldType::U8),
    item("UART1INPROT-RTCM2X", 0x10730003, FieldType::U8),
    item("UART1INPROT-RTCM3X", 0x10730004, FieldType::U8),
    item("UART1OUTPROT-UBX", 0x10740001, FieldType::U8),
    item("UART1OUTPROT-NMEA", 0x10740002, FieldType::U8),
    item("UART1OUTPROT-RTCM3X", 0x10740004, FieldType::U8),
    item("UART2-BAUDRATE", 0x40530001, FieldType::U32),
    item("UART2-STOPBITS", 0x20530002, FieldType::U8),
    item("UART2-DATABITS", 0x20530003, FieldType::U8),
    item("UART2-PARITY", 0x20530004, FieldType::U8),
    item("UART2-ENABLED", 0x10530005, FieldType::U8),
    item("UART2-REMAP", 0x10530006, FieldType::U8),
    item("UART2INPROT-UBX", 0x10750001, FieldType::U8),
    item("UART2INPROT-NMEA", 0x10750002, FieldType::U8),
    item("UART2INPROT-RTCM2X", 0x10750003, FieldType::U8),
    item("UART2INPROT-RTCM3X", 0x10750004, FieldType::U8),
    item("UART2OUTPROT-UBX", 0x10760001, FieldType::U8),
    item("UART2OUTPROT-NMEA", 0x10760002, FieldType::U8),
    item("UART2OUTPROT-RTCM3X", 0x10760004, FieldType::U8),
    item("USB-ENABLED", 0x10650001, FieldType::U8),
    item("USB-SELFPOW", 0x10650002, FieldType::U8),
    item("USB-VENDOR_ID", 0x3065000a, FieldType::U16),
    item("USB-PRODUCT_ID", 0x3065000b, FieldType::U16),
    item("USB-POWER", 0x3065000c, FieldType::U16),
    item("USB-VENDOR_STR0", 0x5065000d, FieldType::U64),
    item("USB-VENDOR_STR1", 0x5065000e, FieldType::U64),
    item("USB-VENDOR_STR2", 0x5065000f, FieldType::U64),
    item("USB-VENDOR_STR3", 0x50650010, FieldType::U64),
    item("USB-PRODUCT_STR0", 0x50650011, FieldType::U64),
    item("USB-PRODUCT_STR1", 0x50650012, FieldType::U64),
    item("USB-PRODUCT_STR2", 0x50650013, FieldType::U64),
    item("USB-PRODUCT_STR3", 0x50650014, FieldType::U64),
    item("USB-SERIAL_NO_STR0", 0x50650015, FieldType::U64),
    item("USB-SERIAL_NO_STR1", 0x50650016, FieldType::U64),
    item("USB-SERIAL_NO_STR2", 0x50650017, FieldType::U64),
    item("USB-SERIAL_NO_STR3", 0x50650018, FieldType::U64),
    item("USBINPROT-UBX", 0x10770001, FieldType::U8),
    item("USBINPROT-NMEA", 0x10770002, FieldType::U8),
    item("USBINPROT-RTCM2X", 0x10770003, FieldType::U8),
    item("USBINPROT-RTCM3X", 0x10770004, FieldType::U8),
    item("USBOUTPROT-UBX", 0x10780001, FieldType::U8),
    item("USBOUTPROT-NMEA", 0x10780002, FieldType::U8),
    item("USBOUTPROT-RTCM3X", 0x10780004, FieldType::U8),
];

static BY_NAME: Lazy<HashMap<&'static str, &'static ConfigItem>> =
    Lazy::new(|| CONFIG_ITEMS.iter().map(|i| (i.name, i)).collect());

/// Look up a configuration item by name (without the `CFG-` prefix).
/// Case-sensitive.
pub fn lookup(name: &str) -> Option<&'static ConfigItem> {
    BY_NAME.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_names_are_unique() {
        assert_eq!(BY_NAME.len(), CONFIG_ITEMS.len());
    }

    #[test]
    fn test_known_keys() {
        let mode = lookup("TMODE-MODE").unwrap();
        assert_eq!(mode.key, 0x2003_0001);
        assert_eq!(mode.value_type, FieldType::U8);

        let height = lookup("TMODE-HEIGHT").unwrap();
        assert_eq!(height.key, 0x4003_000B);
        assert_eq!(height.value_type, FieldType::I32);

        let baud = lookup("UART1-BAUDRATE").unwrap();
        assert_eq!(baud.key, 0x4052_0001);
        assert_eq!(baud.value_type, FieldType::U32);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(lookup("tmode-mode").is_none());
        assert!(lookup("TMODE-BOGUS").is_none());
    }
}
