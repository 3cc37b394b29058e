// This file is part of Bifrost.
//
// Bifrost is free software: you can redistribute it and/or modify it under the
// terms of the GNU Lesser General Public License as published by the Free Software
// Foundation, either version 3 of the License, or (at your option) any later version.
//
// Bifrost is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with Bifrost.
// If not, see https://www.gnu.org/licenses/.

use alloy_sol_macro::sol;

// From https://github.com/OffchainLabs/nitro-contracts/blob/main/src/node-interface/NodeInterface.sol#L25
sol! {
    #![sol(all_derives)]
    interface NodeInterface {
        function estimateRetryableTicket(
            address sender,
            uint256 deposit,
            address to,
            uint256 l2CallValue,
            address excessFeeRefundAddress,
            address callValueRefundAddress,
            bytes calldata data
        ) external;
    }
}

// From https://github.com/OffchainLabs/token-bridge-contracts/blob/main/contracts/tokenbridge/ethereum/gateway/L1OrbitGatewayRouter.sol
sol! {
    #![sol(all_derives)]
    interface L1OrbitGatewayRouter {
        function getGateway(address token) external view returns (address gateway);
    }
}

// From https://github.com/OffchainLabs/token-bridge-contracts/blob/main/contracts/tokenbridge/ethereum/gateway/L1OrbitCustomGateway.sol
sol! {
    #![sol(all_derives)]
    interface L1OrbitCustomGateway {
        function counterpartGateway() external view returns (address);

        function getOutboundCalldata(
            address token,
            address from,
            address to,
            uint256 amount,
            bytes memory data
        ) external view returns (bytes memory outboundCalldata);
    }
}

// From https://github.com/OffchainLabs/nitro-contracts/blob/main/src/bridge/ERC20Inbox.sol
sol! {
    #![sol(all_derives)]
    interface ERC20Inbox {
        function createRetryableTicket(
            address to,
            uint256 l2CallValue,
            uint256 maxSubmissionCost,
            address excessFeeRefundAddress,
            address callValueRefundAddress,
            uint256 gasLimit,
            uint256 maxFeePerGas,
            uint256 tokenTotalFeeAmount,
            bytes calldata data
        ) external returns (uint256);
    }
}
