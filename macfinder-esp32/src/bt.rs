//! Bluetooth Classic radio with an SPP server
//!
//! Controller and Bluedroid bring-up go through `BtDriver`; the device name,
//! scan mode and SPP server are set with the raw Bluedroid API, which
//! esp-idf-svc does not wrap.

use esp_idf_svc::bt::{BtClassic, BtDriver};
use esp_idf_svc::hal::modem::Modem;
use esp_idf_svc::nvs::EspDefaultNvsPartition;
use esp_idf_svc::sys::{self, esp, EspError, ESP_ERR_INVALID_ARG, ESP_ERR_INVALID_STATE};
use log::*;
use macfinder_mcu::{BtAddr, Radio};
use std::ffi::{CStr, CString};

/// Service record name of the SPP server
const SPP_SERVER_NAME: &CStr = c"SPP_SERVER";

pub struct SppRadio {
    modem: Option<Modem>,
    nvs: Option<EspDefaultNvsPartition>,
    driver: Option<BtDriver<'static, BtClassic>>,
}

impl SppRadio {
    pub fn new(modem: Modem, nvs: EspDefaultNvsPartition) -> Self {
        Self {
            modem: Some(modem),
            nvs: Some(nvs),
            driver: None,
        }
    }

    fn bring_up(&mut self, device_name: &str) -> Result<(), EspError> {
        let modem = self
            .modem
            .take()
            .ok_or_else(EspError::from_infallible::<ESP_ERR_INVALID_STATE>)?;

        // Controller init + enable, Bluedroid init + enable
        self.driver = Some(BtDriver::new(modem, self.nvs.take())?);
        info!("Bluedroid enabled");

        let name = CString::new(device_name)
            .map_err(|_| EspError::from_infallible::<ESP_ERR_INVALID_ARG>())?;
        esp!(unsafe { sys::esp_bt_dev_set_device_name(name.as_ptr()) })?;

        esp!(unsafe {
            sys::esp_bt_gap_set_scan_mode(
                sys::esp_bt_connection_mode_t_ESP_BT_CONNECTABLE,
                sys::esp_bt_discovery_mode_t_ESP_BT_GENERAL_DISCOVERABLE,
            )
        })?;

        // The server itself is started from the callback once SPP reports
        // ESP_SPP_INIT_EVT.
        esp!(unsafe { sys::esp_spp_register_callback(Some(spp_callback)) })?;
        let spp_config = sys::esp_spp_cfg_t {
            mode: sys::esp_spp_mode_t_ESP_SPP_MODE_CB,
            enable_l2cap_ertm: true,
            tx_buffer_size: 0,
        };
        esp!(unsafe { sys::esp_spp_enhanced_init(&spp_config) })?;

        info!("SPP initialized as '{}'", device_name);
        Ok(())
    }
}

impl Radio for SppRadio {
    type Error = EspError;

    fn start(&mut self, device_name: &str) -> Result<(), Self::Error> {
        self.bring_up(device_name).inspect_err(|e| {
            error!("Bluetooth bring-up failed: {:?}", e);
        })
    }

    fn address(&self) -> BtAddr {
        if self.driver.is_none() {
            return BtAddr::default();
        }

        // Points into Bluedroid's own copy, valid while the stack is enabled
        let ptr = unsafe { sys::esp_bt_dev_get_address() };
        if ptr.is_null() {
            return BtAddr::default();
        }

        let mut bytes = [0u8; BtAddr::LEN];
        unsafe { std::ptr::copy_nonoverlapping(ptr, bytes.as_mut_ptr(), BtAddr::LEN) };
        BtAddr::new(bytes)
    }
}

unsafe extern "C" fn spp_callback(
    event: sys::esp_spp_cb_event_t,
    _param: *mut sys::esp_spp_cb_param_t,
) {
    if event == sys::esp_spp_cb_event_t_ESP_SPP_INIT_EVT {
        let result = unsafe {
            sys::esp_spp_start_srv(
                sys::ESP_SPP_SEC_NONE as sys::esp_spp_sec_t,
                sys::esp_spp_role_t_ESP_SPP_ROLE_SLAVE,
                0,
                SPP_SERVER_NAME.as_ptr(),
            )
        };
        if let Err(e) = esp!(result) {
            warn!("SPP server failed to start: {:?}", e);
        }
    }
}
